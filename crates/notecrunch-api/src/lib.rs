//! # notecrunch-api
//!
//! HTTP API layer for NoteCrunch built on Axum.
//!
//! Provides the REST endpoints under `/api`, the bearer-token extractor
//! that builds a `RequestContext`, input extractors that turn rejections
//! into validation errors, DTOs, middleware (CORS, compression, logging)
//! and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
