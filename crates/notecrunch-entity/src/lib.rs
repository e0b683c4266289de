//! # notecrunch-entity
//!
//! Row models for NoteCrunch. Every struct in this crate represents a
//! database table row or a value object handed to a repository. Row
//! structs derive `Debug`, `Clone`, `Serialize`, `Deserialize` and
//! `sqlx::FromRow`, and carry the typed ids from `notecrunch-core`.

pub mod flashcard;
pub mod folder;
pub mod set;
pub mod summary;
pub mod user;

pub use flashcard::{Flashcard, FlashcardChanges, NewFlashcard};
pub use folder::Folder;
pub use set::{FolderAssignment, NewSet, Set, SetChanges};
pub use summary::{NewSummary, Summary, SummarySource};
pub use user::User;
