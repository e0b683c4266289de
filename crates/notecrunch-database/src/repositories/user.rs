//! User repository implementation.

use sqlx::PgConnection;

use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;
use notecrunch_entity::user::User;

/// Queries against the `users` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserRepository;

impl UserRepository {
    /// Insert the user for `sub`, or refresh the existing row.
    ///
    /// A blank or missing `email` never overwrites a stored one.
    pub async fn upsert(
        conn: &mut PgConnection,
        sub: &str,
        email: Option<&str>,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (sub, email) VALUES ($1, NULLIF(btrim($2), '')) \
             ON CONFLICT (sub) DO UPDATE SET \
                 email = COALESCE(EXCLUDED.email, users.email), \
                 updated_at = NOW() \
             RETURNING *",
        )
        .bind(sub)
        .bind(email)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert user", e))
    }
}
