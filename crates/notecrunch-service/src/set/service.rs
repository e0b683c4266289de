//! Set operations, including the three-state folder reassignment.

use tracing::info;

use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;
use notecrunch_core::types::id::{FolderId, SetId};
use notecrunch_core::types::pagination::ListWindow;
use notecrunch_database::DatabasePool;
use notecrunch_database::connection::commit;
use notecrunch_database::repositories::{FlashcardRepository, FolderRepository, SetRepository};
use notecrunch_entity::flashcard::Flashcard;
use notecrunch_entity::set::{FolderAssignment, NewSet, Set, SetChanges};

use crate::context::RequestContext;
use crate::validation::{non_blank, non_blank_opt};

/// Manages the caller's flashcard sets.
#[derive(Debug, Clone)]
pub struct SetService {
    db: DatabasePool,
}

/// Filter and window for listing sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetListQuery {
    /// Only sets filed under this folder.
    pub folder_id: Option<FolderId>,
    /// Limit/offset.
    pub window: ListWindow,
}

/// Request to create a set.
#[derive(Debug, Clone)]
pub struct CreateSetRequest {
    /// Set name; trimmed before storing.
    pub name: String,
    /// Folder to file the set under.
    pub folder_id: Option<FolderId>,
}

/// Partial set update.
#[derive(Debug, Clone, Default)]
pub struct UpdateSetRequest {
    /// New name, or `None` to keep it.
    pub name: Option<String>,
    /// Folder reference change.
    pub folder: FolderAssignment,
}

impl SetService {
    /// Creates a new set service.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Lists the caller's sets, newest first.
    ///
    /// A folder filter naming a folder the caller does not own matches
    /// nothing and yields an empty list.
    pub async fn list_sets(&self, ctx: &RequestContext, query: SetListQuery) -> AppResult<Vec<Set>> {
        let mut conn = self.db.acquire().await?;
        SetRepository::list(&mut conn, ctx.owner_id, query.folder_id, query.window).await
    }

    /// Creates a set, optionally inside one of the caller's folders.
    pub async fn create_set(&self, ctx: &RequestContext, req: CreateSetRequest) -> AppResult<Set> {
        let name = non_blank(&req.name, "name")?;

        let mut tx = self.db.begin().await?;

        if let Some(folder_id) = req.folder_id {
            FolderRepository::lock_for_reference(&mut tx, folder_id, ctx.owner_id)
                .await?
                .ok_or_else(|| AppError::not_found("Folder not found"))?;
        }

        let set = SetRepository::create(
            &mut tx,
            &NewSet {
                name,
                folder_id: req.folder_id,
                owner_id: ctx.owner_id,
            },
        )
        .await?;

        commit(tx).await?;

        info!(
            owner_id = %ctx.owner_id,
            set_id = %set.id,
            folder_id = ?set.folder_id,
            "Set created"
        );
        Ok(set)
    }

    /// Applies a partial update to a set.
    ///
    /// The folder reference is left alone, cleared or moved depending on
    /// [`FolderAssignment`]. Moving to a folder the caller does not own is
    /// not found and changes nothing.
    pub async fn update_set(
        &self,
        ctx: &RequestContext,
        set_id: SetId,
        req: UpdateSetRequest,
    ) -> AppResult<Set> {
        let changes = SetChanges {
            name: non_blank_opt(req.name.as_deref(), "name")?,
            folder: req.folder,
        };

        let mut tx = self.db.begin().await?;

        // Folders are locked before sets, matching delete_folder.
        if let Some(folder_id) = changes.folder.target() {
            FolderRepository::lock_for_reference(&mut tx, folder_id, ctx.owner_id)
                .await?
                .ok_or_else(|| AppError::not_found("Folder not found"))?;
        }

        let current = SetRepository::lock_for_update(&mut tx, set_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Set not found"))?;

        if changes.is_empty() {
            return Ok(current);
        }

        let name = changes.name.as_deref().unwrap_or(current.name.as_str());
        let folder_id = changes.folder.apply(current.folder_id);

        let set = SetRepository::update(&mut tx, set_id, ctx.owner_id, name, folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Set not found"))?;

        commit(tx).await?;

        info!(
            owner_id = %ctx.owner_id,
            set_id = %set.id,
            folder_id = ?set.folder_id,
            "Set updated"
        );
        Ok(set)
    }

    /// Files a set under a folder. Both must belong to the caller.
    pub async fn assign_folder(
        &self,
        ctx: &RequestContext,
        set_id: SetId,
        folder_id: FolderId,
    ) -> AppResult<Set> {
        self.update_set(
            ctx,
            set_id,
            UpdateSetRequest {
                name: None,
                folder: FolderAssignment::Assign(folder_id),
            },
        )
        .await
    }

    /// Deletes a set and returns its prior row. Its flashcards cascade.
    pub async fn delete_set(&self, ctx: &RequestContext, set_id: SetId) -> AppResult<Set> {
        let mut conn = self.db.acquire().await?;

        let set = SetRepository::delete(&mut conn, set_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Set not found"))?;

        info!(owner_id = %ctx.owner_id, set_id = %set.id, "Set deleted");
        Ok(set)
    }

    /// Lists the flashcards of a set, newest first.
    pub async fn list_set_flashcards(
        &self,
        ctx: &RequestContext,
        set_id: SetId,
    ) -> AppResult<Vec<Flashcard>> {
        let mut conn = self.db.acquire().await?;

        SetRepository::find_owned(&mut conn, set_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Set not found"))?;

        FlashcardRepository::list_by_set(&mut conn, ctx.owner_id, set_id).await
    }

    /// Lists the caller's sets that are not filed under any folder.
    pub async fn list_unassigned(&self, ctx: &RequestContext) -> AppResult<Vec<Set>> {
        let mut conn = self.db.acquire().await?;
        SetRepository::list_unassigned(&mut conn, ctx.owner_id).await
    }

    /// Clears the folder reference on every set in a folder and returns
    /// the updated sets. A second call returns an empty list.
    pub async fn unassign_by_folder(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
    ) -> AppResult<Vec<Set>> {
        let mut tx = self.db.begin().await?;

        FolderRepository::lock_for_reference(&mut tx, folder_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        let sets = SetRepository::unassign_folder(&mut tx, ctx.owner_id, folder_id).await?;

        commit(tx).await?;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder_id,
            count = sets.len(),
            "Sets unassigned from folder"
        );
        Ok(sets)
    }
}
