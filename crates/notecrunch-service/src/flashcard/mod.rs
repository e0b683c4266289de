//! Flashcard services.

pub mod service;

pub use service::{CreateFlashcardRequest, FlashcardService, UpdateFlashcardRequest};
