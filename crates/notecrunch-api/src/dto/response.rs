//! Response DTOs.
//!
//! Entity rows are serialized directly; these cover the remaining shapes.

use serde::{Deserialize, Serialize};

use notecrunch_core::types::GeneratedFlashcard;

/// Flashcards produced from free-form text. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFlashcardsResponse {
    /// Generated question/answer pairs.
    pub flashcards: Vec<GeneratedFlashcard>,
}

/// Transcript of a remote video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResponse {
    /// Transcript text.
    pub text: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `OK`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Database reachability response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbHealthResponse {
    /// Whether a trivial query succeeded.
    pub ok: bool,
}
