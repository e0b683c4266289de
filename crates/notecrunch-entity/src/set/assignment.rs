//! Three-state folder reference used by partial set updates.

use serde::{Deserialize, Serialize};

use notecrunch_core::types::id::FolderId;

/// How a set update treats the set's folder reference.
///
/// Decoded from a JSON field that may be absent (`Unchanged`), `null`
/// (`Unassign`) or an id (`Assign`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderAssignment {
    /// Leave the reference as it is.
    #[default]
    Unchanged,
    /// Clear the reference.
    Unassign,
    /// Point the set at this folder.
    Assign(FolderId),
}

impl FolderAssignment {
    /// The folder to check ownership of before applying, if any.
    pub fn target(&self) -> Option<FolderId> {
        match self {
            Self::Assign(id) => Some(*id),
            _ => None,
        }
    }

    /// Resolve the new column value given the current one.
    pub fn apply(&self, current: Option<FolderId>) -> Option<FolderId> {
        match self {
            Self::Unchanged => current,
            Self::Unassign => None,
            Self::Assign(id) => Some(*id),
        }
    }
}

impl From<Option<Option<FolderId>>> for FolderAssignment {
    fn from(value: Option<Option<FolderId>>) -> Self {
        match value {
            None => Self::Unchanged,
            Some(None) => Self::Unassign,
            Some(Some(id)) => Self::Assign(id),
        }
    }
}
