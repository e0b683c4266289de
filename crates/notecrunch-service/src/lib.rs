//! # notecrunch-service
//!
//! Business logic for NoteCrunch. Every service method receives an explicit
//! [`RequestContext`] naming the caller and scopes all reads and writes to
//! that owner. Rows owned by someone else are reported as not found.
//!
//! Operations that check ownership and then mutate run inside a single
//! transaction, locking the mutated row `FOR UPDATE` and any referenced
//! parent `FOR KEY SHARE`.

pub mod context;
pub mod flashcard;
pub mod folder;
pub mod set;
pub mod summary;
mod validation;

pub use context::RequestContext;
pub use flashcard::{CreateFlashcardRequest, FlashcardService, UpdateFlashcardRequest};
pub use folder::{CreateFolderRequest, FolderService};
pub use set::{CreateSetRequest, SetListQuery, SetService, UpdateSetRequest};
pub use summary::{SummaryService, UploadedMedia};
