//! Route handlers organized by domain.

pub mod flashcard;
pub mod folder;
pub mod health;
pub mod set;
pub mod summary;
