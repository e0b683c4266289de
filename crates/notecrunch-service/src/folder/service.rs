//! Folder operations: list, create, delete with set reassignment, and the
//! folder-scoped listings.

use serde::{Deserialize, Serialize};
use tracing::info;

use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;
use notecrunch_core::types::id::FolderId;
use notecrunch_database::DatabasePool;
use notecrunch_database::connection::commit;
use notecrunch_database::repositories::{FlashcardRepository, FolderRepository, SetRepository};
use notecrunch_entity::flashcard::Flashcard;
use notecrunch_entity::folder::Folder;
use notecrunch_entity::set::Set;

use crate::context::RequestContext;
use crate::validation::non_blank;

/// Manages the caller's folders.
#[derive(Debug, Clone)]
pub struct FolderService {
    db: DatabasePool,
}

/// Request to create a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name; trimmed before storing.
    pub name: String,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Lists the caller's folders, newest first.
    pub async fn list_folders(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        let mut conn = self.db.acquire().await?;
        FolderRepository::list(&mut conn, ctx.owner_id).await
    }

    /// Creates a folder. A name the caller already uses is a conflict.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        req: CreateFolderRequest,
    ) -> AppResult<Folder> {
        let name = non_blank(&req.name, "name")?;

        let mut conn = self.db.acquire().await?;
        let folder = FolderRepository::create(&mut conn, ctx.owner_id, &name).await?;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );
        Ok(folder)
    }

    /// Deletes a folder and returns its prior row.
    ///
    /// Sets filed under the folder survive with their folder reference
    /// cleared; both happen in one transaction.
    pub async fn delete_folder(&self, ctx: &RequestContext, folder_id: FolderId) -> AppResult<Folder> {
        let mut tx = self.db.begin().await?;

        FolderRepository::lock_for_update(&mut tx, folder_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        let released = SetRepository::unassign_folder(&mut tx, ctx.owner_id, folder_id).await?;

        let folder = FolderRepository::delete(&mut tx, folder_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        commit(tx).await?;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder.id,
            released_sets = released.len(),
            "Folder deleted"
        );
        Ok(folder)
    }

    /// Lists the flashcards of every set in a folder, newest first.
    pub async fn list_folder_flashcards(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
    ) -> AppResult<Vec<Flashcard>> {
        let mut conn = self.db.acquire().await?;

        FolderRepository::find_owned(&mut conn, folder_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        FlashcardRepository::list_by_folder(&mut conn, ctx.owner_id, folder_id).await
    }

    /// Lists the sets filed under a folder, newest first.
    pub async fn list_folder_sets(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
    ) -> AppResult<Vec<Set>> {
        let mut conn = self.db.acquire().await?;

        FolderRepository::find_owned(&mut conn, folder_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        SetRepository::list_by_folder(&mut conn, ctx.owner_id, folder_id).await
    }
}
