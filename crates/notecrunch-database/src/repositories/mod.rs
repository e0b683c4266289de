//! Repositories for all NoteCrunch tables.

pub mod flashcard;
pub mod folder;
pub mod set;
pub mod summary;
pub mod user;

pub use flashcard::FlashcardRepository;
pub use folder::FolderRepository;
pub use set::SetRepository;
pub use summary::SummaryRepository;
pub use user::UserRepository;
