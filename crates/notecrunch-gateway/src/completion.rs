//! Client for an OpenAI-compatible chat completion API.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use notecrunch_core::config::CompletionConfig;
use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;

use crate::truncate_detail;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Issues single-turn chat completions.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    endpoint: String,
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl CompletionClient {
    /// Build a client from configuration.
    pub fn new(config: &CompletionConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build completion client",
                    e,
                )
            })?;

        Ok(Self {
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            http,
        })
    }

    /// Send a system and a user message; return the first choice's content.
    pub async fn complete(&self, system: &str, user: &str) -> AppResult<String> {
        if self.api_key.is_empty() {
            return Err(AppError::service_unavailable(
                "Completion API is not configured",
            ));
        }

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let started = Instant::now();
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(model = %self.model, error = %e, "Completion request failed");
                let message = if e.is_timeout() {
                    "Completion API timed out"
                } else {
                    "Completion API is unreachable"
                };
                AppError::with_source(ErrorKind::ExternalService, message, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(model = %self.model, %status, "Completion API returned an error");
            return Err(AppError::external_service(format!(
                "Completion API returned {}: {}",
                status.as_u16(),
                truncate_detail(&body)
            )));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Completion API returned an unreadable body",
                e,
            )
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::external_service("Completion API returned no content"))?;

        debug!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Completion received"
        );
        Ok(content)
    }
}
