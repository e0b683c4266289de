//! `AuthUser` extractor: verifies the bearer token and resolves the caller
//! to an owner.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use notecrunch_core::error::AppError;
use notecrunch_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        AppError::authentication("Missing bearer token")
                    } else {
                        AppError::authentication("Invalid Authorization header")
                    }
                })?;

        let identity = state.verifier.verify(bearer.token()).await?;
        let user = state.identity.resolve_identity(&identity).await?;

        Ok(AuthUser(RequestContext::new(user.id)))
    }
}
