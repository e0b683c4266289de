//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use notecrunch_auth::{IdentityResolver, TokenVerifier};
use notecrunch_core::config::AppConfig;
use notecrunch_core::traits::GenerationGateway;
use notecrunch_database::DatabasePool;
use notecrunch_service::{FlashcardService, FolderService, SetService, SummaryService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db: DatabasePool,
    /// Bearer token verifier
    pub verifier: Arc<TokenVerifier>,
    /// Subject-to-owner resolution
    pub identity: IdentityResolver,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Set service
    pub set_service: Arc<SetService>,
    /// Flashcard service
    pub flashcard_service: Arc<FlashcardService>,
    /// Summary service
    pub summary_service: Arc<SummaryService>,
}

impl AppState {
    /// Wire services around a pool, a verifier and a generation gateway.
    pub fn new(
        config: AppConfig,
        db: DatabasePool,
        verifier: TokenVerifier,
        gateway: Arc<dyn GenerationGateway>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            identity: IdentityResolver::new(db.clone()),
            verifier: Arc::new(verifier),
            folder_service: Arc::new(FolderService::new(db.clone())),
            set_service: Arc::new(SetService::new(db.clone())),
            flashcard_service: Arc::new(FlashcardService::new(db.clone(), gateway.clone())),
            summary_service: Arc::new(SummaryService::new(db.clone(), gateway)),
            db,
        }
    }
}
