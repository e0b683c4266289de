//! Values exchanged with the generation gateway.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A question/answer pair produced by the completion API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFlashcard {
    /// Front of the card.
    pub question: String,
    /// Back of the card.
    pub answer: String,
}

/// What the transcriber should turn into text.
#[derive(Debug, Clone)]
pub enum TranscriptionSource {
    /// A remote video URL whose audio is downloaded before transcription.
    Url(String),
    /// Media uploaded by the client.
    Upload {
        /// Original file name, used for the extension hint.
        file_name: String,
        /// MIME type reported by the client.
        content_type: Option<String>,
        /// Raw media bytes.
        data: Bytes,
    },
}

impl TranscriptionSource {
    /// Short label persisted alongside summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Upload { .. } => "upload",
        }
    }
}
