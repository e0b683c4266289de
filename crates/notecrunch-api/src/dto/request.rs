//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use notecrunch_core::types::{FolderId, SetId};
use notecrunch_entity::FolderAssignment;
use notecrunch_service as service;

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
}

impl From<CreateFolderRequest> for service::CreateFolderRequest {
    fn from(req: CreateFolderRequest) -> Self {
        Self { name: req.name }
    }
}

/// Create set request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSetRequest {
    /// Set name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Folder to file the set under.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
}

impl From<CreateSetRequest> for service::CreateSetRequest {
    fn from(req: CreateSetRequest) -> Self {
        Self {
            name: req.name,
            folder_id: req.folder_id,
        }
    }
}

/// Partial set update.
///
/// `folder_id` distinguishes an omitted key (unchanged) from an explicit
/// `null` (unassign) and an id (move).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSetRequest {
    /// New name.
    #[validate(length(min = 1, max = 255, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// Folder reference change.
    #[serde(default, deserialize_with = "present")]
    pub folder_id: Option<Option<FolderId>>,
}

impl From<UpdateSetRequest> for service::UpdateSetRequest {
    fn from(req: UpdateSetRequest) -> Self {
        Self {
            name: req.name,
            folder: FolderAssignment::from(req.folder_id),
        }
    }
}

/// Wraps whatever the key held in `Some`; an absent key stays `None`
/// through `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Assign folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssignFolderRequest {
    /// Target folder.
    pub folder_id: FolderId,
}

/// Optional folder filter on the set list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetFilterParams {
    /// Only sets filed under this folder.
    pub folder_id: Option<FolderId>,
}

/// Create flashcard request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFlashcardRequest {
    /// Prompt side.
    #[validate(length(min = 1, message = "Question is required"))]
    pub question: String,
    /// Answer side.
    #[validate(length(min = 1, message = "Answer is required"))]
    pub answer: String,
    /// Owning set.
    pub set_id: SetId,
}

impl From<CreateFlashcardRequest> for service::CreateFlashcardRequest {
    fn from(req: CreateFlashcardRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
            set_id: req.set_id,
        }
    }
}

/// Partial flashcard update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateFlashcardRequest {
    /// New question.
    #[validate(length(min = 1, message = "Question must not be empty"))]
    pub question: Option<String>,
    /// New answer.
    #[validate(length(min = 1, message = "Answer must not be empty"))]
    pub answer: Option<String>,
}

impl From<UpdateFlashcardRequest> for service::UpdateFlashcardRequest {
    fn from(req: UpdateFlashcardRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
        }
    }
}

/// Flashcard generation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateFlashcardsRequest {
    /// Source notes.
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Summarize a remote video.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSummaryRequest {
    /// Video URL.
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
    /// Display title. Defaults to the URL.
    #[serde(default)]
    pub title: Option<String>,
}

/// Transcribe a remote video.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TranscribeRequest {
    /// Video URL.
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
}

fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("URL must start with http:// or https://".into()))
    }
}
