//! Flashcard repository implementation.

use sqlx::PgConnection;

use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;
use notecrunch_core::types::id::{FlashcardId, FolderId, SetId, UserId};
use notecrunch_entity::flashcard::{Flashcard, FlashcardChanges, NewFlashcard};

/// Queries against the `flashcards` table. Every lookup is scoped by owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlashcardRepository;

impl FlashcardRepository {
    /// All flashcards of an owner, newest first.
    pub async fn list(conn: &mut PgConnection, owner_id: UserId) -> AppResult<Vec<Flashcard>> {
        sqlx::query_as::<_, Flashcard>(
            "SELECT * FROM flashcards WHERE owner_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list flashcards", e))
    }

    /// Flashcards in one set, newest first.
    pub async fn list_by_set(
        conn: &mut PgConnection,
        owner_id: UserId,
        set_id: SetId,
    ) -> AppResult<Vec<Flashcard>> {
        sqlx::query_as::<_, Flashcard>(
            "SELECT * FROM flashcards WHERE owner_id = $1 AND set_id = $2 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .bind(set_id)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list flashcards in set", e)
        })
    }

    /// Flashcards of every set the owner filed under `folder_id`, newest first.
    pub async fn list_by_folder(
        conn: &mut PgConnection,
        owner_id: UserId,
        folder_id: FolderId,
    ) -> AppResult<Vec<Flashcard>> {
        sqlx::query_as::<_, Flashcard>(
            "SELECT f.* FROM flashcards f \
             INNER JOIN sets s ON s.id = f.set_id \
             WHERE s.owner_id = $1 AND f.owner_id = $1 AND s.folder_id = $2 \
             ORDER BY f.created_at DESC, f.id DESC",
        )
        .bind(owner_id)
        .bind(folder_id)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list flashcards in folder", e)
        })
    }

    /// Insert a flashcard into a set the caller already locked.
    pub async fn create(conn: &mut PgConnection, data: &NewFlashcard) -> AppResult<Flashcard> {
        sqlx::query_as::<_, Flashcard>(
            "INSERT INTO flashcards (question, answer, set_id, owner_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.set_id)
        .bind(data.owner_id)
        .fetch_one(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create flashcard", e))
    }

    /// Apply a partial update. Omitted fields keep their stored value;
    /// `updated_at` always moves forward.
    pub async fn update(
        conn: &mut PgConnection,
        id: FlashcardId,
        owner_id: UserId,
        changes: &FlashcardChanges,
    ) -> AppResult<Option<Flashcard>> {
        sqlx::query_as::<_, Flashcard>(
            "UPDATE flashcards SET \
                 question = COALESCE($3, question), \
                 answer = COALESCE($4, answer), \
                 updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond') \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(changes.question.as_deref())
        .bind(changes.answer.as_deref())
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update flashcard", e))
    }

    /// Delete a flashcard. Returns whether a row was removed.
    pub async fn delete(
        conn: &mut PgConnection,
        id: FlashcardId,
        owner_id: UserId,
    ) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM flashcards WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete flashcard", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
