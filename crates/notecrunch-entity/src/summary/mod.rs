//! Lecture summary entities.

pub mod model;

pub use model::{NewSummary, Summary, SummarySource};
