//! Lecture summary services.

pub mod service;

pub use service::{SummaryService, UploadedMedia};
