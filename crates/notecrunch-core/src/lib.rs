//! # notecrunch-core
//!
//! Core crate for NoteCrunch. Contains configuration schemas, typed
//! identifiers, the generation gateway trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other NoteCrunch crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
