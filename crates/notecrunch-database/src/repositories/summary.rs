//! Summary repository implementation.

use sqlx::PgConnection;

use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;
use notecrunch_core::types::id::{SummaryId, UserId};
use notecrunch_entity::summary::{NewSummary, Summary};

/// Queries against the `summaries` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRepository;

impl SummaryRepository {
    /// All summaries of an owner, newest first.
    pub async fn list(conn: &mut PgConnection, owner_id: UserId) -> AppResult<Vec<Summary>> {
        sqlx::query_as::<_, Summary>(
            "SELECT * FROM summaries WHERE owner_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list summaries", e))
    }

    /// Find a summary owned by `owner_id`.
    pub async fn find_owned(
        conn: &mut PgConnection,
        id: SummaryId,
        owner_id: UserId,
    ) -> AppResult<Option<Summary>> {
        sqlx::query_as::<_, Summary>("SELECT * FROM summaries WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find summary", e))
    }

    /// Store a generated summary.
    pub async fn create(conn: &mut PgConnection, data: &NewSummary) -> AppResult<Summary> {
        sqlx::query_as::<_, Summary>(
            "INSERT INTO summaries (owner_id, title, summary, transcript, source) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.title)
        .bind(&data.summary)
        .bind(&data.transcript)
        .bind(data.source)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create summary", e))
    }
}
