//! Flashcard set entities.

pub mod assignment;
pub mod model;

pub use assignment::FolderAssignment;
pub use model::{NewSet, Set, SetChanges};
