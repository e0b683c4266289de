//! Shared fixtures for the service integration tests.
//!
//! Database-backed tests need `NOTECRUNCH_TEST_DATABASE_URL`; without it
//! [`TestDb::connect`] returns `None` and the test returns early.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use notecrunch_core::config::DatabaseConfig;
use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;
use notecrunch_core::traits::GenerationGateway;
use notecrunch_core::types::generation::{GeneratedFlashcard, TranscriptionSource};
use notecrunch_database::DatabasePool;
use notecrunch_database::migration::run_migrations;
use notecrunch_database::repositories::UserRepository;
use notecrunch_service::{FlashcardService, FolderService, RequestContext, SetService, SummaryService};

/// Services wired against the test database.
pub struct TestDb {
    pub pool: DatabasePool,
    pub folders: FolderService,
    pub sets: SetService,
    pub flashcards: FlashcardService,
    pub summaries: SummaryService,
    pub gateway: Arc<StubGateway>,
}

impl TestDb {
    pub async fn connect() -> Option<Self> {
        let url = std::env::var("NOTECRUNCH_TEST_DATABASE_URL").ok()?;
        let pool = DatabasePool::connect(&DatabaseConfig::with_url(url))
            .await
            .expect("connect to test database");
        run_migrations(pool.pool()).await.expect("run migrations");
        Some(Self::with_pool(pool))
    }

    /// Services over a pool that never connects, for tests that stop
    /// before touching the database.
    pub fn offline() -> Self {
        let pool = DatabasePool::connect_lazy(&DatabaseConfig::with_url(
            "postgres://notecrunch@localhost:1/unused",
        ))
        .expect("lazy pool");
        Self::with_pool(pool)
    }

    fn with_pool(pool: DatabasePool) -> Self {
        let gateway = Arc::new(StubGateway::default());
        let dyn_gateway: Arc<dyn GenerationGateway> = gateway.clone();
        Self {
            folders: FolderService::new(pool.clone()),
            sets: SetService::new(pool.clone()),
            flashcards: FlashcardService::new(pool.clone(), dyn_gateway.clone()),
            summaries: SummaryService::new(pool.clone(), dyn_gateway),
            gateway,
            pool,
        }
    }

    /// Resolve a fresh user and return a context acting as them.
    pub async fn user(&self) -> RequestContext {
        let sub = format!("sub-{}", uuid::Uuid::new_v4());
        let mut conn = self.pool.acquire().await.expect("acquire");
        let user = UserRepository::upsert(&mut conn, &sub, Some("student@example.com"))
            .await
            .expect("upsert user");
        RequestContext::new(user.id)
    }
}

/// Scripted gateway. Records every call.
#[derive(Debug, Default)]
pub struct StubGateway {
    pub flashcards: Mutex<Option<AppResult<Vec<GeneratedFlashcard>>>>,
    pub transcript: Mutex<Option<String>>,
    pub calls: Mutex<Vec<String>>,
}

impl StubGateway {
    pub fn respond_with_cards(&self, cards: AppResult<Vec<GeneratedFlashcard>>) {
        *self.flashcards.lock().unwrap() = Some(cards);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationGateway for StubGateway {
    async fn transcribe(&self, source: TranscriptionSource) -> AppResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("transcribe:{}", source.kind()));
        Ok(self
            .transcript
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "the mitochondria is the powerhouse of the cell".into()))
    }

    async fn generate_flashcards(&self, text: &str) -> AppResult<Vec<GeneratedFlashcard>> {
        self.calls.lock().unwrap().push(format!("generate:{text}"));
        self.flashcards
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(AppError::internal("no scripted flashcards")))
    }

    async fn summarize(&self, transcript: &str) -> AppResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("summarize:{}", transcript.len()));
        Ok("- Mitochondria produce ATP".into())
    }
}
