//! Route definitions for the NoteCrunch HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`, except the
//! public liveness check at `/health`.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route and the shared state applied.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(set_routes())
        .merge(flashcard_routes())
        .merge(summary_routes())
        .route("/health/db", get(handlers::health::database_health));

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Folder endpoints
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route(
            "/folders/{id}",
            delete(handlers::folder::delete_folder),
        )
        .route(
            "/folders/{id}/flashcards",
            get(handlers::folder::list_folder_flashcards),
        )
        .route("/folders/{id}/sets", get(handlers::folder::list_folder_sets))
}

/// Set endpoints
fn set_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sets",
            get(handlers::set::list_sets).post(handlers::set::create_set),
        )
        .route("/sets/unassigned", get(handlers::set::list_unassigned))
        .route(
            "/sets/unassign-by-folder/{folder_id}",
            put(handlers::set::unassign_by_folder),
        )
        .route(
            "/sets/{id}",
            put(handlers::set::update_set)
                .patch(handlers::set::update_set)
                .delete(handlers::set::delete_set),
        )
        .route(
            "/sets/{id}/flashcards",
            get(handlers::set::list_set_flashcards),
        )
        .route("/sets/{id}/folder", put(handlers::set::assign_folder))
}

/// Flashcard endpoints
fn flashcard_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/flashcards",
            get(handlers::flashcard::list_flashcards).post(handlers::flashcard::create_flashcard),
        )
        .route(
            "/flashcards/generate",
            post(handlers::flashcard::generate_flashcards),
        )
        .route(
            "/flashcards/{id}",
            put(handlers::flashcard::update_flashcard).delete(handlers::flashcard::delete_flashcard),
        )
}

/// Summary and transcription endpoints
fn summary_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/summaries",
            get(handlers::summary::list_summaries).post(handlers::summary::create_summary),
        )
        .route("/summaries/upload", post(handlers::summary::upload_summary))
        .route("/summaries/{id}", get(handlers::summary::get_summary))
        .route("/transcribe", post(handlers::summary::transcribe))
}
