//! Fetches the audio track of a remote video through `yt-dlp`.
//!
//! The transcriber only accepts media uploads, so URL sources are
//! downloaded here and forwarded as multipart like any other upload.

use std::process::Stdio;
use std::time::{Duration, Instant};

use bytes::Bytes;
use tokio::process::Command;
use tracing::{error, info};

use notecrunch_core::config::TranscriberConfig;
use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;

use crate::truncate_detail;

/// File name attached to downloaded audio. Whisper sniffs the container.
pub const DOWNLOADED_FILE_NAME: &str = "audio.m4a";

/// Runs the configured downloader and collects the audio from stdout.
#[derive(Debug, Clone)]
pub struct AudioDownloader {
    program: String,
    timeout: Duration,
    max_bytes: u64,
}

impl AudioDownloader {
    /// Build a downloader from transcriber configuration.
    pub fn new(config: &TranscriberConfig) -> Self {
        Self {
            program: config.downloader.clone(),
            timeout: Duration::from_secs(config.download_timeout_seconds),
            max_bytes: config.max_download_bytes,
        }
    }

    /// Download the best audio stream of `url`.
    pub async fn download(&self, url: &str) -> AppResult<Bytes> {
        let started = Instant::now();

        let mut cmd = Command::new(&self.program);
        cmd.args([
            "--no-playlist",
            "--quiet",
            "--no-warnings",
            "-f",
            "bestaudio[ext=m4a]/bestaudio",
            "-o",
            "-",
            "--",
            url,
        ])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                error!(program = %self.program, error = %e, "Failed to start audio downloader");
                return Err(AppError::with_source(
                    ErrorKind::ExternalService,
                    "Audio downloader could not be started",
                    e,
                ));
            }
            Err(_) => {
                error!(program = %self.program, timeout_s = self.timeout.as_secs(), "Audio download timed out");
                return Err(AppError::external_service("Audio download timed out"));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output.status.code().unwrap_or(-1);
            error!(program = %self.program, code, "Audio downloader failed");
            return Err(AppError::external_service(format!(
                "Audio download failed ({code}): {}",
                truncate_detail(&stderr)
            )));
        }

        if output.stdout.is_empty() {
            return Err(AppError::external_service("Audio download returned no data"));
        }
        if output.stdout.len() as u64 > self.max_bytes {
            return Err(AppError::external_service(format!(
                "Downloaded audio exceeds {} bytes",
                self.max_bytes
            )));
        }

        info!(
            bytes = output.stdout.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Audio downloaded"
        );
        Ok(Bytes::from(output.stdout))
    }
}
