//! HTTP implementation of [`GenerationGateway`].

use async_trait::async_trait;
use tracing::info;

use notecrunch_core::config::GatewayConfig;
use notecrunch_core::result::AppResult;
use notecrunch_core::traits::GenerationGateway;
use notecrunch_core::types::generation::{GeneratedFlashcard, TranscriptionSource};

use crate::completion::CompletionClient;
use crate::flashcards::{
    FLASHCARD_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT, flashcard_prompt, parse_generated_flashcards,
    summary_prompt,
};
use crate::transcriber::TranscriberClient;

/// Gateway backed by the transcriber microservice and a chat completion API.
#[derive(Debug, Clone)]
pub struct HttpGenerationGateway {
    transcriber: TranscriberClient,
    completion: CompletionClient,
}

impl HttpGenerationGateway {
    /// Build both clients from configuration.
    pub fn from_config(config: &GatewayConfig) -> AppResult<Self> {
        Ok(Self {
            transcriber: TranscriberClient::new(&config.transcriber)?,
            completion: CompletionClient::new(&config.completion)?,
        })
    }
}

#[async_trait]
impl GenerationGateway for HttpGenerationGateway {
    async fn transcribe(&self, source: TranscriptionSource) -> AppResult<String> {
        self.transcriber.transcribe(source).await
    }

    async fn generate_flashcards(&self, text: &str) -> AppResult<Vec<GeneratedFlashcard>> {
        let raw = self
            .completion
            .complete(FLASHCARD_SYSTEM_PROMPT, &flashcard_prompt(text))
            .await?;
        let cards = parse_generated_flashcards(&raw)?;
        info!(count = cards.len(), "Generated flashcards");
        Ok(cards)
    }

    async fn summarize(&self, transcript: &str) -> AppResult<String> {
        let summary = self
            .completion
            .complete(SUMMARY_SYSTEM_PROMPT, &summary_prompt(transcript))
            .await?;
        Ok(summary.trim().to_string())
    }
}
