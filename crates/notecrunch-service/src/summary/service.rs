//! Transcribe-then-summarize pipeline and summary lookups.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;
use notecrunch_core::traits::GenerationGateway;
use notecrunch_core::types::generation::TranscriptionSource;
use notecrunch_core::types::id::SummaryId;
use notecrunch_database::DatabasePool;
use notecrunch_database::repositories::SummaryRepository;
use notecrunch_entity::summary::{NewSummary, Summary, SummarySource};

use crate::context::RequestContext;
use crate::validation::non_blank;

/// Title used for uploads that name neither a title nor a file.
const DEFAULT_UPLOAD_TITLE: &str = "Uploaded File";

/// A media file received from the client.
#[derive(Debug, Clone)]
pub struct UploadedMedia {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Creates and reads AI-generated lecture summaries.
#[derive(Debug, Clone)]
pub struct SummaryService {
    db: DatabasePool,
    gateway: Arc<dyn GenerationGateway>,
}

impl SummaryService {
    /// Creates a new summary service.
    pub fn new(db: DatabasePool, gateway: Arc<dyn GenerationGateway>) -> Self {
        Self { db, gateway }
    }

    /// Lists the caller's summaries, newest first.
    pub async fn list_summaries(&self, ctx: &RequestContext) -> AppResult<Vec<Summary>> {
        let mut conn = self.db.acquire().await?;
        SummaryRepository::list(&mut conn, ctx.owner_id).await
    }

    /// Fetches one of the caller's summaries.
    pub async fn get_summary(&self, ctx: &RequestContext, id: SummaryId) -> AppResult<Summary> {
        let mut conn = self.db.acquire().await?;
        SummaryRepository::find_owned(&mut conn, id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Summary not found"))
    }

    /// Transcribes a remote video without storing anything.
    pub async fn transcribe_url(&self, ctx: &RequestContext, url: &str) -> AppResult<String> {
        let url = non_blank(url, "url")?;
        let text = self.gateway.transcribe(TranscriptionSource::Url(url)).await?;
        info!(owner_id = %ctx.owner_id, chars = text.len(), "URL transcribed");
        Ok(text)
    }

    /// Transcribes and summarizes a remote video, then stores the result.
    pub async fn create_from_url(
        &self,
        ctx: &RequestContext,
        url: &str,
        title: Option<String>,
    ) -> AppResult<Summary> {
        let url = non_blank(url, "url")?;
        let title = pick_title(title, Some(url.as_str()), &url);

        self.summarize_and_store(
            ctx,
            TranscriptionSource::Url(url),
            SummarySource::Url,
            title,
        )
        .await
    }

    /// Transcribes and summarizes uploaded media, then stores the result.
    pub async fn create_from_upload(
        &self,
        ctx: &RequestContext,
        media: UploadedMedia,
        title: Option<String>,
    ) -> AppResult<Summary> {
        if media.data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }

        let title = pick_title(title, media.file_name.as_deref(), DEFAULT_UPLOAD_TITLE);
        let source = TranscriptionSource::Upload {
            file_name: media
                .file_name
                .unwrap_or_else(|| "upload.bin".to_string()),
            content_type: media.content_type,
            data: media.data,
        };

        self.summarize_and_store(ctx, source, SummarySource::Upload, title)
            .await
    }

    async fn summarize_and_store(
        &self,
        ctx: &RequestContext,
        source: TranscriptionSource,
        kind: SummarySource,
        title: String,
    ) -> AppResult<Summary> {
        let transcript = self.gateway.transcribe(source).await?;
        let summary_text = self.gateway.summarize(&transcript).await?;

        let mut conn = self.db.acquire().await?;
        let summary = SummaryRepository::create(
            &mut conn,
            &NewSummary {
                owner_id: ctx.owner_id,
                title,
                summary: summary_text,
                transcript,
                source: kind,
            },
        )
        .await?;

        info!(
            owner_id = %ctx.owner_id,
            summary_id = %summary.id,
            source = %summary.source,
            "Summary created"
        );
        Ok(summary)
    }
}

/// First non-blank of the explicit title, the fallback, then the default.
fn pick_title(explicit: Option<String>, fallback: Option<&str>, default: &str) -> String {
    explicit
        .as_deref()
        .into_iter()
        .chain(fallback)
        .map(str::trim)
        .find(|t| !t.is_empty())
        .unwrap_or(default)
        .to_string()
}
