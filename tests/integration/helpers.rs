//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use notecrunch_api::{AppState, build_app};
use notecrunch_auth::TokenVerifier;
use notecrunch_core::config::AppConfig;
use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;
use notecrunch_core::traits::GenerationGateway;
use notecrunch_core::types::{GeneratedFlashcard, TranscriptionSource};
use notecrunch_database::DatabasePool;
use notecrunch_database::migration::run_migrations;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ISSUER: &str = "notecrunch-test";

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
    /// Scripted generation gateway behind the app
    pub gateway: Arc<StubGateway>,
}

impl TestApp {
    /// App backed by the test database, or `None` when it is not configured.
    pub async fn with_database() -> Option<Self> {
        let url = std::env::var("NOTECRUNCH_TEST_DATABASE_URL").ok()?;
        let config = test_config(&url);
        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        Some(Self::build(config, db))
    }

    /// App over a pool that never reaches a server. Fine for requests that
    /// are rejected before any query runs.
    pub fn offline() -> Self {
        let config = test_config("postgres://notecrunch@127.0.0.1:1/unused");
        let db = DatabasePool::connect_lazy(&config.database).expect("lazy pool");
        Self::build(config, db)
    }

    fn build(config: AppConfig, db: DatabasePool) -> Self {
        let verifier = TokenVerifier::from_config(&config.auth).expect("verifier");
        let gateway = Arc::new(StubGateway::default());
        let dyn_gateway: Arc<dyn GenerationGateway> = gateway.clone();
        let state = AppState::new(config, db.clone(), verifier, dyn_gateway);

        Self {
            router: build_app(state),
            db,
            gateway,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.send(method, path, "application/json", Body::from(body_str), token)
            .await
    }

    /// Send a raw body with an explicit content type.
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: Body,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Config for tests: HS256 tokens and short pool timeouts.
pub fn test_config(database_url: &str) -> AppConfig {
    let mut config = AppConfig::from_toml(&format!(
        r#"
        [database]
        url = "{database_url}"
        max_connections = 5
        connect_timeout_seconds = 1
        run_migrations = false

        [auth]
        mode = "shared_secret"
        jwt_secret = "{TEST_SECRET}"
        issuer = "{TEST_ISSUER}"
        "#
    ))
    .expect("test config");
    config.database.min_connections = 0;
    config
}

/// Signed access token for a brand new subject.
pub fn new_user_token() -> String {
    token_for(&format!("test-user-{}", Uuid::new_v4()))
}

/// Signed access token for the given subject.
pub fn token_for(subject: &str) -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    let claims = serde_json::json!({
        "sub": subject,
        "email": format!("{subject}@example.com"),
        "token_use": "access",
        "iss": TEST_ISSUER,
        "exp": exp,
    });
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("sign token")
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `id` field of the body as a string.
    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .unwrap_or_else(|| panic!("no id in {:?}", self.body))
            .to_string()
    }

    /// The `error` code of an error body.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// Scripted gateway. Records every call.
#[derive(Debug, Default)]
pub struct StubGateway {
    pub flashcards: Mutex<Option<AppResult<Vec<GeneratedFlashcard>>>>,
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
        Ok("photosynthesis converts light into chemical energy".into())
    }

    async fn generate_flashcards(&self, text: &str) -> AppResult<Vec<GeneratedFlashcard>> {
        self.calls.lock().unwrap().push(format!("generate:{text}"));
        self.flashcards
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(AppError::internal("no scripted flashcards")))
    }

    async fn summarize(&self, _transcript: &str) -> AppResult<String> {
        self.calls.lock().unwrap().push("summarize".into());
        Ok("- Light becomes sugar".into())
    }
}
