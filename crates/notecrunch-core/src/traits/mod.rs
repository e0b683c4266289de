//! Core traits defined in `notecrunch-core` and implemented by other crates.

pub mod generation;

pub use generation::GenerationGateway;
