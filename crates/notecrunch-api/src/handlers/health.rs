//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::{DbHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/db
pub async fn database_health(
    State(state): State<AppState>,
) -> (StatusCode, Json<DbHealthResponse>) {
    match state.db.health_check().await {
        Ok(true) => (StatusCode::OK, Json(DbHealthResponse { ok: true })),
        Ok(false) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(DbHealthResponse { ok: false }),
        ),
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DbHealthResponse { ok: false }),
            )
        }
    }
}
