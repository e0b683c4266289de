//! Flashcard operations and generation from free-form text.

use std::sync::Arc;

use tracing::info;

use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;
use notecrunch_core::traits::GenerationGateway;
use notecrunch_core::types::generation::GeneratedFlashcard;
use notecrunch_core::types::id::{FlashcardId, SetId};
use notecrunch_database::DatabasePool;
use notecrunch_database::connection::commit;
use notecrunch_database::repositories::{FlashcardRepository, SetRepository};
use notecrunch_entity::flashcard::{Flashcard, FlashcardChanges, NewFlashcard};

use crate::context::RequestContext;
use crate::validation::{non_blank, non_blank_opt};

/// Manages the caller's flashcards.
#[derive(Debug, Clone)]
pub struct FlashcardService {
    db: DatabasePool,
    gateway: Arc<dyn GenerationGateway>,
}

/// Request to create a flashcard.
#[derive(Debug, Clone)]
pub struct CreateFlashcardRequest {
    pub question: String,
    pub answer: String,
    /// Set the card goes into; must belong to the caller.
    pub set_id: SetId,
}

/// Partial flashcard update.
#[derive(Debug, Clone, Default)]
pub struct UpdateFlashcardRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl FlashcardService {
    /// Creates a new flashcard service.
    pub fn new(db: DatabasePool, gateway: Arc<dyn GenerationGateway>) -> Self {
        Self { db, gateway }
    }

    /// Lists all of the caller's flashcards, newest first.
    pub async fn list_flashcards(&self, ctx: &RequestContext) -> AppResult<Vec<Flashcard>> {
        let mut conn = self.db.acquire().await?;
        FlashcardRepository::list(&mut conn, ctx.owner_id).await
    }

    /// Creates a flashcard in one of the caller's sets.
    pub async fn create_flashcard(
        &self,
        ctx: &RequestContext,
        req: CreateFlashcardRequest,
    ) -> AppResult<Flashcard> {
        let question = non_blank(&req.question, "question")?;
        let answer = non_blank(&req.answer, "answer")?;

        let mut tx = self.db.begin().await?;

        SetRepository::lock_for_reference(&mut tx, req.set_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Set not found"))?;

        let card = FlashcardRepository::create(
            &mut tx,
            &NewFlashcard {
                question,
                answer,
                set_id: req.set_id,
                owner_id: ctx.owner_id,
            },
        )
        .await?;

        commit(tx).await?;

        info!(
            owner_id = %ctx.owner_id,
            flashcard_id = %card.id,
            set_id = %card.set_id,
            "Flashcard created"
        );
        Ok(card)
    }

    /// Updates the question and/or answer of a flashcard.
    pub async fn update_flashcard(
        &self,
        ctx: &RequestContext,
        flashcard_id: FlashcardId,
        req: UpdateFlashcardRequest,
    ) -> AppResult<Flashcard> {
        let changes = FlashcardChanges {
            question: non_blank_opt(req.question.as_deref(), "question")?,
            answer: non_blank_opt(req.answer.as_deref(), "answer")?,
        };

        let mut conn = self.db.acquire().await?;
        let card = FlashcardRepository::update(&mut conn, flashcard_id, ctx.owner_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Flashcard not found"))?;

        info!(owner_id = %ctx.owner_id, flashcard_id = %card.id, "Flashcard updated");
        Ok(card)
    }

    /// Deletes a flashcard.
    pub async fn delete_flashcard(
        &self,
        ctx: &RequestContext,
        flashcard_id: FlashcardId,
    ) -> AppResult<()> {
        let mut conn = self.db.acquire().await?;
        if !FlashcardRepository::delete(&mut conn, flashcard_id, ctx.owner_id).await? {
            return Err(AppError::not_found("Flashcard not found"));
        }

        info!(owner_id = %ctx.owner_id, flashcard_id = %flashcard_id, "Flashcard deleted");
        Ok(())
    }

    /// Generates question/answer pairs from `text`. Nothing is stored.
    pub async fn generate_flashcards(
        &self,
        ctx: &RequestContext,
        text: &str,
    ) -> AppResult<Vec<GeneratedFlashcard>> {
        let text = non_blank(text, "text")?;

        let cards = self.gateway.generate_flashcards(&text).await?;

        info!(
            owner_id = %ctx.owner_id,
            input_chars = text.len(),
            count = cards.len(),
            "Flashcards generated"
        );
        Ok(cards)
    }
}
