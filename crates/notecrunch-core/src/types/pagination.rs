//! Limit/offset windows for list endpoints.

use crate::error::AppError;

/// Default number of rows returned by a list query.
pub const DEFAULT_LIMIT: i64 = 100;
/// Largest accepted limit.
pub const MAX_LIMIT: i64 = 500;

/// A validated `LIMIT`/`OFFSET` pair.
///
/// Only [`ListWindow::new`] builds one from caller input, so every window
/// in circulation has passed the sign checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    limit: i64,
    offset: i64,
}

impl ListWindow {
    /// Build a window from optional caller-supplied values.
    ///
    /// Missing values fall back to limit 100 / offset 0. Negative values are
    /// rejected; limits above [`MAX_LIMIT`] are capped.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Result<Self, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let offset = offset.unwrap_or(0);

        if limit < 0 {
            return Err(AppError::validation("limit must not be negative"));
        }
        if offset < 0 {
            return Err(AppError::validation("offset must not be negative"));
        }

        Ok(Self {
            limit: limit.min(MAX_LIMIT),
            offset,
        })
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
