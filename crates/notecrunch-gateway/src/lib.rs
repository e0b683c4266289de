//! # notecrunch-gateway
//!
//! The generation gateway: transcription through the Whisper transcriber
//! microservice (URL sources are fetched with `yt-dlp` first) and text generation through an OpenAI-compatible chat
//! completion API. Neither client retries; every request carries an
//! explicit timeout.

pub mod completion;
pub mod downloader;
pub mod flashcards;
pub mod gateway;
pub mod transcriber;

pub use completion::CompletionClient;
pub use downloader::AudioDownloader;
pub use flashcards::parse_generated_flashcards;
pub use gateway::HttpGenerationGateway;
pub use transcriber::TranscriberClient;

/// Longest slice of an upstream error body echoed into error messages.
const MAX_DETAIL_CHARS: usize = 200;

/// Shorten an upstream response body for inclusion in an error message.
pub(crate) fn truncate_detail(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_DETAIL_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
