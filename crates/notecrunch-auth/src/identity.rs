//! Mapping verified identities onto internal owner ids.

use tracing::debug;

use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;
use notecrunch_database::DatabasePool;
use notecrunch_database::repositories::UserRepository;
use notecrunch_entity::user::User;

/// The caller as described by a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Non-blank subject claim.
    pub subject: String,
    /// Email claim, dropped when blank.
    pub email: Option<String>,
}

impl VerifiedIdentity {
    /// Build an identity, discarding a blank email.
    pub fn new(subject: impl Into<String>, email: Option<String>) -> Self {
        Self {
            subject: subject.into(),
            email: email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
        }
    }
}

/// Resolves identity-provider subjects to user rows, creating them lazily.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    db: DatabasePool,
}

impl IdentityResolver {
    /// Create a resolver backed by the given pool.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Upsert the user for `subject` and return it.
    ///
    /// Idempotent: the same subject always yields the same owner id. A newer
    /// non-empty email replaces the stored one; a blank email never clears it.
    pub async fn resolve(&self, subject: &str, email: Option<&str>) -> AppResult<User> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(AppError::authentication("Token has no subject"));
        }

        let mut conn = self.db.acquire().await?;
        let user = UserRepository::upsert(&mut conn, subject, email).await?;

        debug!(user_id = %user.id, sub = %user.sub, "Resolved identity");
        Ok(user)
    }

    /// Resolve a verified identity.
    pub async fn resolve_identity(&self, identity: &VerifiedIdentity) -> AppResult<User> {
        self.resolve(&identity.subject, identity.email.as_deref())
            .await
    }
}
