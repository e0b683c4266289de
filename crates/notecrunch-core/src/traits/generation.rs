//! Generation gateway trait: the boundary to transcription and
//! language-model services.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::generation::{GeneratedFlashcard, TranscriptionSource};

/// External transcription and text-generation capabilities.
///
/// Calls may take minutes and may fail. Implementations never retry;
/// transport and upstream failures surface as
/// [`ErrorKind::ExternalService`](crate::error::ErrorKind::ExternalService),
/// malformed flashcard payloads as
/// [`ErrorKind::BadGeneration`](crate::error::ErrorKind::BadGeneration).
/// The [`GenerationGateway`] trait is defined here and implemented in
/// `notecrunch-gateway`.
#[async_trait]
pub trait GenerationGateway: Send + Sync + std::fmt::Debug + 'static {
    /// Turn audio/video into transcript text.
    async fn transcribe(&self, source: TranscriptionSource) -> AppResult<String>;

    /// Produce flashcards from free-form text.
    async fn generate_flashcards(&self, text: &str) -> AppResult<Vec<GeneratedFlashcard>>;

    /// Produce study notes from a transcript.
    async fn summarize(&self, transcript: &str) -> AppResult<String>;
}
