//! Folder handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use notecrunch_core::types::FolderId;
use notecrunch_entity::{Flashcard, Folder, Set};

use crate::dto::request::CreateFolderRequest;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Folder>>> {
    let folders = state.folder_service.list_folders(&auth).await?;
    Ok(Json(folders))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> ApiResult<(StatusCode, Json<Folder>)> {
    let folder = state.folder_service.create_folder(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<FolderId>,
) -> ApiResult<Json<Folder>> {
    let folder = state.folder_service.delete_folder(&auth, id).await?;
    Ok(Json(folder))
}

/// GET /api/folders/{id}/flashcards
pub async fn list_folder_flashcards(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<FolderId>,
) -> ApiResult<Json<Vec<Flashcard>>> {
    let flashcards = state
        .folder_service
        .list_folder_flashcards(&auth, id)
        .await?;
    Ok(Json(flashcards))
}

/// GET /api/folders/{id}/sets
pub async fn list_folder_sets(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<FolderId>,
) -> ApiResult<Json<Vec<Set>>> {
    let sets = state.folder_service.list_folder_sets(&auth, id).await?;
    Ok(Json(sets))
}
