//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notecrunch_core::types::id::{FolderId, UserId};

/// A named group of sets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name, unique per owner.
    pub name: String,
    /// The folder owner.
    pub owner_id: UserId,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}
