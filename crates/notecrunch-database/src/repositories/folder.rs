//! Folder repository implementation.

use sqlx::PgConnection;

use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;
use notecrunch_core::types::id::{FolderId, UserId};
use notecrunch_entity::folder::Folder;

/// Queries against the `folders` table. Every lookup is scoped by owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderRepository;

impl FolderRepository {
    /// All folders of an owner, newest first.
    pub async fn list(conn: &mut PgConnection, owner_id: UserId) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// Find a folder owned by `owner_id`.
    pub async fn find_owned(
        conn: &mut PgConnection,
        id: FolderId,
        owner_id: UserId,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// Find and row-lock a folder that is about to be deleted.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        id: FolderId,
        owner_id: UserId,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE id = $1 AND owner_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock folder", e))
    }

    /// Find a folder and hold a key-share lock so it cannot be deleted while
    /// a set is pointed at it.
    pub async fn lock_for_reference(
        conn: &mut PgConnection,
        id: FolderId,
        owner_id: UserId,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE id = $1 AND owner_id = $2 FOR KEY SHARE",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock folder", e))
    }

    /// Insert a folder. A duplicate name for the same owner is a conflict.
    pub async fn create(conn: &mut PgConnection, owner_id: UserId, name: &str) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, owner_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_owner_id_name_key") =>
            {
                AppError::conflict(format!("Folder '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    /// Delete a folder, returning the removed row.
    pub async fn delete(
        conn: &mut PgConnection,
        id: FolderId,
        owner_id: UserId,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "DELETE FROM folders WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete folder", e))
    }
}
