//! Flashcard entities.

pub mod model;

pub use model::{Flashcard, FlashcardChanges, NewFlashcard};
