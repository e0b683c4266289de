//! Flashcard handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use notecrunch_core::types::FlashcardId;
use notecrunch_entity::Flashcard;

use crate::dto::request::{
    CreateFlashcardRequest, GenerateFlashcardsRequest, UpdateFlashcardRequest,
};
use crate::dto::response::GeneratedFlashcardsResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/flashcards
pub async fn list_flashcards(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Flashcard>>> {
    let flashcards = state.flashcard_service.list_flashcards(&auth).await?;
    Ok(Json(flashcards))
}

/// POST /api/flashcards
pub async fn create_flashcard(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateFlashcardRequest>,
) -> ApiResult<(StatusCode, Json<Flashcard>)> {
    let flashcard = state
        .flashcard_service
        .create_flashcard(&auth, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(flashcard)))
}

/// PUT /api/flashcards/{id}
pub async fn update_flashcard(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<FlashcardId>,
    ValidatedJson(req): ValidatedJson<UpdateFlashcardRequest>,
) -> ApiResult<Json<Flashcard>> {
    let flashcard = state
        .flashcard_service
        .update_flashcard(&auth, id, req.into())
        .await?;
    Ok(Json(flashcard))
}

/// DELETE /api/flashcards/{id}
pub async fn delete_flashcard(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<FlashcardId>,
) -> ApiResult<StatusCode> {
    state.flashcard_service.delete_flashcard(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/flashcards/generate
pub async fn generate_flashcards(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<GenerateFlashcardsRequest>,
) -> ApiResult<Json<GeneratedFlashcardsResponse>> {
    let flashcards = state
        .flashcard_service
        .generate_flashcards(&auth, &req.text)
        .await?;
    Ok(Json(GeneratedFlashcardsResponse { flashcards }))
}
