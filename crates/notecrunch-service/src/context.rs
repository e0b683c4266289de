//! Request context carrying the resolved caller.

use notecrunch_core::types::id::UserId;

/// Context for the current authenticated request.
///
/// Built by the API layer after the bearer token is verified and the
/// subject is resolved to a user row, then passed into every service method
/// so that each operation knows *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Internal owner id of the caller.
    pub owner_id: UserId,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(owner_id: UserId) -> Self {
        Self { owner_id }
    }
}
