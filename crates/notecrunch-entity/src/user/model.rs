//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notecrunch_core::types::id::UserId;

/// A user known to NoteCrunch, created lazily from a verified identity claim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Internal owner identifier.
    pub id: UserId,
    /// Subject claim from the identity provider. Stable and unique.
    pub sub: String,
    /// Last non-empty email seen for this subject.
    pub email: Option<String>,
    /// When the user was first seen.
    pub created_at: DateTime<Utc>,
    /// When the row was last upserted.
    pub updated_at: DateTime<Utc>,
}
