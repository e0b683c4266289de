//! Generation gateway configuration: transcriber microservice and
//! completion API.

use serde::{Deserialize, Serialize};

/// Settings for the external services behind the generation gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Whisper transcriber microservice.
    #[serde(default)]
    pub transcriber: TranscriberConfig,
    /// OpenAI-compatible chat completion API.
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Largest accepted media upload in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_bytes: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            transcriber: TranscriberConfig::default(),
            completion: CompletionConfig::default(),
            max_upload_bytes: default_max_upload(),
        }
    }
}

/// Transcriber microservice settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriberConfig {
    /// Base URL; requests go to `{base_url}/transcribe`.
    #[serde(default = "default_transcriber_url")]
    pub base_url: String,
    /// Value sent in the `x-secret` header.
    #[serde(default)]
    pub shared_secret: String,
    /// Request timeout in seconds. Transcription runs for minutes.
    #[serde(default = "default_transcriber_timeout")]
    pub timeout_seconds: u64,
    /// `yt-dlp` compatible program used to fetch audio for URL sources.
    #[serde(default = "default_downloader")]
    pub downloader: String,
    /// Audio download timeout in seconds.
    #[serde(default = "default_download_timeout")]
    pub download_timeout_seconds: u64,
    /// Largest downloaded audio accepted, in bytes.
    #[serde(default = "default_max_upload")]
    pub max_download_bytes: u64,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            base_url: default_transcriber_url(),
            shared_secret: String::new(),
            timeout_seconds: default_transcriber_timeout(),
            downloader: default_downloader(),
            download_timeout_seconds: default_download_timeout(),
            max_download_bytes: default_max_upload(),
        }
    }
}

/// Chat completion API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// API base, e.g. `https://api.openai.com/v1`.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Bearer API key.
    #[serde(default)]
    pub api_key: String,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_completion_timeout")]
    pub timeout_seconds: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: String::new(),
            model: default_model(),
            timeout_seconds: default_completion_timeout(),
        }
    }
}

fn default_max_upload() -> u64 {
    200 * 1024 * 1024
}

fn default_transcriber_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_transcriber_timeout() -> u64 {
    300
}

fn default_downloader() -> String {
    "yt-dlp".to_string()
}

fn default_download_timeout() -> u64 {
    600
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_completion_timeout() -> u64 {
    120
}
