//! Core type definitions used across the NoteCrunch workspace.

pub mod generation;
pub mod id;
pub mod pagination;

pub use generation::{GeneratedFlashcard, TranscriptionSource};
pub use id::*;
pub use pagination::ListWindow;
