//! Set repository implementation.

use sqlx::PgConnection;

use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;
use notecrunch_core::types::id::{FolderId, SetId, UserId};
use notecrunch_core::types::pagination::ListWindow;
use notecrunch_entity::set::{NewSet, Set};

const NAME_CONSTRAINT: &str = "sets_owner_id_name_key";

/// Queries against the `sets` table. Every lookup is scoped by owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetRepository;

impl SetRepository {
    /// Sets of an owner, newest first, optionally restricted to one folder.
    pub async fn list(
        conn: &mut PgConnection,
        owner_id: UserId,
        folder_id: Option<FolderId>,
        window: ListWindow,
    ) -> AppResult<Vec<Set>> {
        sqlx::query_as::<_, Set>(
            "SELECT * FROM sets \
             WHERE owner_id = $1 AND ($2::uuid IS NULL OR folder_id = $2) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3 OFFSET $4",
        )
        .bind(owner_id)
        .bind(folder_id)
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sets", e))
    }

    /// Every set of an owner filed under `folder_id`, newest first.
    pub async fn list_by_folder(
        conn: &mut PgConnection,
        owner_id: UserId,
        folder_id: FolderId,
    ) -> AppResult<Vec<Set>> {
        sqlx::query_as::<_, Set>(
            "SELECT * FROM sets WHERE owner_id = $1 AND folder_id = $2 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .bind(folder_id)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list sets in folder", e)
        })
    }

    /// Sets of an owner without a folder, newest first.
    pub async fn list_unassigned(conn: &mut PgConnection, owner_id: UserId) -> AppResult<Vec<Set>> {
        sqlx::query_as::<_, Set>(
            "SELECT * FROM sets WHERE owner_id = $1 AND folder_id IS NULL \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unassigned sets", e)
        })
    }

    /// Find a set owned by `owner_id`.
    pub async fn find_owned(
        conn: &mut PgConnection,
        id: SetId,
        owner_id: UserId,
    ) -> AppResult<Option<Set>> {
        sqlx::query_as::<_, Set>("SELECT * FROM sets WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find set", e))
    }

    /// Find and row-lock a set that is about to be modified.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: SetId,
        owner_id: UserId,
    ) -> AppResult<Option<Set>> {
        sqlx::query_as::<_, Set>("SELECT * FROM sets WHERE id = $1 AND owner_id = $2 FOR UPDATE")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock set", e))
    }

    /// Find a set and hold a key-share lock while a flashcard is added to it.
    pub async fn lock_for_reference(
        conn: &mut PgConnection,
        id: SetId,
        owner_id: UserId,
    ) -> AppResult<Option<Set>> {
        sqlx::query_as::<_, Set>(
            "SELECT * FROM sets WHERE id = $1 AND owner_id = $2 FOR KEY SHARE",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock set", e))
    }

    /// Insert a set. A duplicate name for the same owner is a conflict.
    pub async fn create(conn: &mut PgConnection, data: &NewSet) -> AppResult<Set> {
        sqlx::query_as::<_, Set>(
            "INSERT INTO sets (name, folder_id, owner_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.folder_id)
        .bind(data.owner_id)
        .fetch_one(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(NAME_CONSTRAINT) => {
                AppError::conflict(format!("Set '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create set", e),
        })
    }

    /// Overwrite the name and folder reference of a set.
    pub async fn update(
        conn: &mut PgConnection,
        id: SetId,
        owner_id: UserId,
        name: &str,
        folder_id: Option<FolderId>,
    ) -> AppResult<Option<Set>> {
        sqlx::query_as::<_, Set>(
            "UPDATE sets SET name = $3, folder_id = $4, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(name)
        .bind(folder_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(NAME_CONSTRAINT) => {
                AppError::conflict(format!("Set '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update set", e),
        })
    }

    /// Clear the folder reference on every set of `owner_id` filed under
    /// `folder_id`, returning the updated rows.
    pub async fn unassign_folder(
        conn: &mut PgConnection,
        owner_id: UserId,
        folder_id: FolderId,
    ) -> AppResult<Vec<Set>> {
        sqlx::query_as::<_, Set>(
            "UPDATE sets SET folder_id = NULL, updated_at = NOW() \
             WHERE owner_id = $1 AND folder_id = $2 RETURNING *",
        )
        .bind(owner_id)
        .bind(folder_id)
        .fetch_all(conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to unassign sets from folder", e)
        })
    }

    /// Delete a set, returning the removed row. Flashcards cascade.
    pub async fn delete(
        conn: &mut PgConnection,
        id: SetId,
        owner_id: UserId,
    ) -> AppResult<Option<Set>> {
        sqlx::query_as::<_, Set>("DELETE FROM sets WHERE id = $1 AND owner_id = $2 RETURNING *")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete set", e))
    }
}
