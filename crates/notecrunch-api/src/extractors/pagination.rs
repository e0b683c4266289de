//! Limit/offset query parameters.

use serde::{Deserialize, Serialize};

use notecrunch_core::result::AppResult;
use notecrunch_core::types::ListWindow;

/// Query parameters for list endpoints that page by limit and offset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Rows to return (default 100, capped at 500).
    pub limit: Option<i64>,
    /// Rows to skip (default 0).
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Converts to a validated `ListWindow`.
    pub fn into_window(self) -> AppResult<ListWindow> {
        ListWindow::new(self.limit, self.offset)
    }
}
