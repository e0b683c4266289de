//! Input checks shared by the services.

use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;

/// Trim `value` and reject it if nothing is left.
pub(crate) fn non_blank(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Like [`non_blank`] for optional fields of a partial update.
pub(crate) fn non_blank_opt(value: Option<&str>, field: &str) -> AppResult<Option<String>> {
    value.map(|v| non_blank(v, field)).transpose()
}
