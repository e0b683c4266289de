//! Set services.

pub mod service;

pub use service::{CreateSetRequest, SetListQuery, SetService, UpdateSetRequest};
