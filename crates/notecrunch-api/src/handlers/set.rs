//! Set handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use notecrunch_core::types::{FolderId, SetId};
use notecrunch_entity::{Flashcard, Set};
use notecrunch_service::SetListQuery;

use crate::dto::request::{
    AssignFolderRequest, CreateSetRequest, SetFilterParams, UpdateSetRequest,
};
use crate::error::ApiResult;
use crate::extractors::{ApiPath, ApiQuery, AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/sets?folder_id=&limit=&offset=
pub async fn list_sets(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(filter): ApiQuery<SetFilterParams>,
    ApiQuery(page): ApiQuery<PaginationParams>,
) -> ApiResult<Json<Vec<Set>>> {
    let query = SetListQuery {
        folder_id: filter.folder_id,
        window: page.into_window()?,
    };
    let sets = state.set_service.list_sets(&auth, query).await?;
    Ok(Json(sets))
}

/// POST /api/sets
pub async fn create_set(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateSetRequest>,
) -> ApiResult<(StatusCode, Json<Set>)> {
    let set = state.set_service.create_set(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(set)))
}

/// PUT|PATCH /api/sets/{id}
pub async fn update_set(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<SetId>,
    ValidatedJson(req): ValidatedJson<UpdateSetRequest>,
) -> ApiResult<Json<Set>> {
    let set = state.set_service.update_set(&auth, id, req.into()).await?;
    Ok(Json(set))
}

/// DELETE /api/sets/{id}
pub async fn delete_set(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<SetId>,
) -> ApiResult<Json<Set>> {
    let set = state.set_service.delete_set(&auth, id).await?;
    Ok(Json(set))
}

/// GET /api/sets/{id}/flashcards
pub async fn list_set_flashcards(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<SetId>,
) -> ApiResult<Json<Vec<Flashcard>>> {
    let flashcards = state.set_service.list_set_flashcards(&auth, id).await?;
    Ok(Json(flashcards))
}

/// PUT /api/sets/{id}/folder
pub async fn assign_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<SetId>,
    ValidatedJson(req): ValidatedJson<AssignFolderRequest>,
) -> ApiResult<Json<Set>> {
    let set = state
        .set_service
        .assign_folder(&auth, id, req.folder_id)
        .await?;
    Ok(Json(set))
}

/// GET /api/sets/unassigned
pub async fn list_unassigned(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Set>>> {
    let sets = state.set_service.list_unassigned(&auth).await?;
    Ok(Json(sets))
}

/// PUT /api/sets/unassign-by-folder/{folder_id}
pub async fn unassign_by_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(folder_id): ApiPath<FolderId>,
) -> ApiResult<Json<Vec<Set>>> {
    let sets = state
        .set_service
        .unassign_by_folder(&auth, folder_id)
        .await?;
    Ok(Json(sets))
}
