//! Flashcard entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notecrunch_core::types::id::{FlashcardId, SetId, UserId};

/// A question/answer card inside a set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flashcard {
    /// Unique flashcard identifier.
    pub id: FlashcardId,
    /// Front of the card.
    pub question: String,
    /// Back of the card.
    pub answer: String,
    /// Containing set.
    pub set_id: SetId,
    /// The card owner.
    pub owner_id: UserId,
    /// When the card was created.
    pub created_at: DateTime<Utc>,
    /// When the card was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a flashcard.
#[derive(Debug, Clone)]
pub struct NewFlashcard {
    pub question: String,
    pub answer: String,
    pub set_id: SetId,
    pub owner_id: UserId,
}

/// Partial flashcard update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct FlashcardChanges {
    pub question: Option<String>,
    pub answer: Option<String>,
}
