//! Client for the Whisper transcriber microservice.

use std::time::{Duration, Instant};

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{info, warn};

use notecrunch_core::config::TranscriberConfig;
use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;
use notecrunch_core::types::generation::TranscriptionSource;

use crate::downloader::{AudioDownloader, DOWNLOADED_FILE_NAME};
use crate::truncate_detail;

/// Header carrying the shared secret the transcriber checks.
const SECRET_HEADER: &str = "x-secret";

/// Transcriber response. Older deployments answer with `transcript`.
#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    transcript: Option<String>,
}

impl TranscribeResponse {
    fn into_text(self) -> Option<String> {
        [self.text, self.transcript]
            .into_iter()
            .flatten()
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())
    }
}

/// Sends media to `{base_url}/transcribe` as a multipart `file` upload.
/// URL sources are downloaded first.
#[derive(Debug, Clone)]
pub struct TranscriberClient {
    endpoint: String,
    secret: String,
    http: reqwest::Client,
    downloader: AudioDownloader,
}

impl TranscriberClient {
    /// Build a client from configuration.
    pub fn new(config: &TranscriberConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build transcriber client",
                    e,
                )
            })?;

        Ok(Self {
            endpoint: format!("{}/transcribe", config.base_url.trim_end_matches('/')),
            secret: config.shared_secret.clone(),
            http,
            downloader: AudioDownloader::new(config),
        })
    }

    /// Transcribe `source`, returning the non-empty transcript text.
    pub async fn transcribe(&self, source: TranscriptionSource) -> AppResult<String> {
        if self.secret.is_empty() {
            return Err(AppError::service_unavailable(
                "Transcriber is not configured",
            ));
        }

        let kind = source.kind();
        let (file_name, content_type, data) = match source {
            TranscriptionSource::Url(url) => (
                DOWNLOADED_FILE_NAME.to_string(),
                None,
                self.downloader.download(&url).await?,
            ),
            TranscriptionSource::Upload {
                file_name,
                content_type,
                data,
            } => (file_name, content_type, data),
        };

        let mut part = Part::bytes(data.to_vec()).file_name(file_name);
        if let Some(mime) = content_type {
            part = part.mime_str(&mime).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Validation,
                    format!("Invalid content type '{mime}'"),
                    e,
                )
            })?;
        }

        let request = self
            .http
            .post(&self.endpoint)
            .header(SECRET_HEADER, &self.secret)
            .multipart(Form::new().part("file", part));

        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            warn!(source = kind, error = %e, "Transcriber request failed");
            let message = if e.is_timeout() {
                "Transcriber timed out"
            } else {
                "Transcriber is unreachable"
            };
            AppError::with_source(ErrorKind::ExternalService, message, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(source = kind, %status, "Transcriber returned an error");
            return Err(AppError::external_service(format!(
                "Transcriber returned {}: {}",
                status.as_u16(),
                truncate_detail(&body)
            )));
        }

        let body: TranscribeResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Transcriber returned an unreadable body",
                e,
            )
        })?;

        let text = body
            .into_text()
            .ok_or_else(|| AppError::external_service("Transcriber returned no transcript"))?;

        info!(
            source = kind,
            chars = text.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Transcription complete"
        );
        Ok(text)
    }
}
