//! Custom Axum extractors.
//!
//! Every extractor rejects with [`ApiError`](crate::error::ApiError) so that
//! malformed input produces the same JSON error body as the services.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;
pub mod query;

pub use auth::AuthUser;
pub use json::ValidatedJson;
pub use pagination::PaginationParams;
pub use path::ApiPath;
pub use query::ApiQuery;
