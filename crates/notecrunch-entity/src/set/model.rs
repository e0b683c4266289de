//! Set entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notecrunch_core::types::id::{FolderId, SetId, UserId};

use super::assignment::FolderAssignment;

/// A named group of flashcards, optionally filed under a folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Set {
    /// Unique set identifier.
    pub id: SetId,
    /// Set name, unique per owner.
    pub name: String,
    /// Containing folder, `None` when unassigned.
    pub folder_id: Option<FolderId>,
    /// The set owner.
    pub owner_id: UserId,
    /// When the set was created.
    pub created_at: DateTime<Utc>,
    /// When the set was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Set {
    /// Whether the set is filed under a folder.
    pub fn is_assigned(&self) -> bool {
        self.folder_id.is_some()
    }
}

/// Data required to insert a set.
#[derive(Debug, Clone)]
pub struct NewSet {
    /// Trimmed name.
    pub name: String,
    /// Folder the set starts in, already checked for ownership.
    pub folder_id: Option<FolderId>,
    /// The set owner.
    pub owner_id: UserId,
}

/// A partial update applied to an existing set.
#[derive(Debug, Clone, Default)]
pub struct SetChanges {
    /// New trimmed name, or `None` to keep the current one.
    pub name: Option<String>,
    /// What to do with the folder reference.
    pub folder: FolderAssignment,
}

impl SetChanges {
    /// Whether the update touches nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && matches!(self.folder, FolderAssignment::Unchanged)
    }
}
