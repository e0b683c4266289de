//! Summary and transcription handlers.

use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use tracing::debug;

use notecrunch_core::error::AppError;
use notecrunch_core::types::SummaryId;
use notecrunch_entity::Summary;
use notecrunch_service::UploadedMedia;

use crate::dto::request::{CreateSummaryRequest, TranscribeRequest};
use crate::dto::response::TranscriptResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/summaries
pub async fn list_summaries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Summary>>> {
    let summaries = state.summary_service.list_summaries(&auth).await?;
    Ok(Json(summaries))
}

/// GET /api/summaries/{id}
pub async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<SummaryId>,
) -> ApiResult<Json<Summary>> {
    let summary = state.summary_service.get_summary(&auth, id).await?;
    Ok(Json(summary))
}

/// POST /api/summaries
pub async fn create_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateSummaryRequest>,
) -> ApiResult<(StatusCode, Json<Summary>)> {
    let summary = state
        .summary_service
        .create_from_url(&auth, &req.url, req.title)
        .await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// POST /api/summaries/upload (multipart: `file`, optional `title`)
pub async fn upload_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<(StatusCode, Json<Summary>)> {
    let mut multipart =
        multipart.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let mut media: Option<UploadedMedia> = None;
    let mut title: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                debug!(file_name = ?file_name, size = data.len(), "Received upload");
                media = Some(UploadedMedia {
                    file_name,
                    content_type,
                    data,
                });
            }
            Some("title") => {
                title = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let media = media.ok_or_else(|| AppError::validation("No file uploaded"))?;
    let summary = state
        .summary_service
        .create_from_upload(&auth, media, title)
        .await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// POST /api/transcribe
pub async fn transcribe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<TranscribeRequest>,
) -> ApiResult<Json<TranscriptResponse>> {
    let text = state.summary_service.transcribe_url(&auth, &req.url).await?;
    Ok(Json(TranscriptResponse { text }))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::validation("Uploaded file is too large")
    } else {
        AppError::validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}
