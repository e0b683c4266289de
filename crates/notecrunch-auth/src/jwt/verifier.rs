//! Bearer token verification.

use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};

use notecrunch_core::config::{AuthConfig, TokenMode};
use notecrunch_core::error::AppError;
use notecrunch_core::result::AppResult;

use super::claims::Claims;
use super::jwks::JwksCache;
use crate::identity::VerifiedIdentity;

/// Where signature keys come from.
enum SigningKeys {
    /// HS256 with one shared secret.
    Shared(DecodingKey),
    /// RS256 keys published by the identity provider.
    Jwks(JwksCache),
}

/// Validates identity-provider access tokens.
///
/// Checks, in order:
/// 1. Signature against the configured key source
/// 2. Expiration (with leeway) and issuer when configured
/// 3. `token_use == "access"` when required
/// 4. `client_id` when configured
/// 5. A non-blank subject
pub struct TokenVerifier {
    keys: SigningKeys,
    issuer: Option<String>,
    client_id: Option<String>,
    require_access_token: bool,
    leeway: u64,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match &self.keys {
            SigningKeys::Shared(_) => "shared_secret",
            SigningKeys::Jwks(_) => "jwks",
        };
        f.debug_struct("TokenVerifier")
            .field("mode", &mode)
            .field("issuer", &self.issuer)
            .field("client_id", &self.client_id)
            .finish()
    }
}

impl TokenVerifier {
    /// Build a verifier from auth configuration.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let keys = match config.mode {
            TokenMode::SharedSecret => {
                if config.jwt_secret.is_empty() {
                    return Err(AppError::configuration(
                        "auth.jwt_secret is required in shared_secret mode",
                    ));
                }
                SigningKeys::Shared(DecodingKey::from_secret(config.jwt_secret.as_bytes()))
            }
            TokenMode::Jwks => {
                let url = config.resolved_jwks_url().ok_or_else(|| {
                    AppError::configuration("auth.issuer or auth.jwks_url is required in jwks mode")
                })?;
                SigningKeys::Jwks(JwksCache::new(
                    url,
                    Duration::from_secs(config.jwks_timeout_seconds),
                )?)
            }
        };

        Ok(Self {
            keys,
            issuer: config.issuer.clone(),
            client_id: config.client_id.clone(),
            require_access_token: config.require_access_token,
            leeway: config.leeway_seconds,
        })
    }

    /// Verify a raw bearer token and extract the caller's identity.
    pub async fn verify(&self, token: &str) -> AppResult<VerifiedIdentity> {
        let header =
            decode_header(token).map_err(|_| AppError::authentication("Invalid token format"))?;

        let fetched;
        let (key, algorithm) = match &self.keys {
            SigningKeys::Shared(key) => (key, Algorithm::HS256),
            SigningKeys::Jwks(cache) => {
                let kid = header
                    .kid
                    .as_deref()
                    .ok_or_else(|| AppError::authentication("Token has no key id"))?;
                fetched = cache.key_for(kid).await?;
                (&fetched, Algorithm::RS256)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.leeway = self.leeway;
        validation.validate_exp = true;
        validation.validate_aud = false;
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }

        let claims = decode::<Claims>(token, key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::authentication("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::authentication("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                    AppError::authentication("Token issuer mismatch")
                }
                _ => AppError::authentication("Invalid token"),
            })?
            .claims;

        if self.require_access_token && !claims.is_access_token() {
            return Err(AppError::authentication("Expected an access token"));
        }

        if let Some(expected) = &self.client_id {
            if claims.client_id.as_deref() != Some(expected.as_str()) {
                return Err(AppError::authentication(
                    "Token was issued to a different client",
                ));
            }
        }

        let subject = claims
            .subject()
            .ok_or_else(|| AppError::authentication("Token has no subject"))?
            .to_string();

        Ok(VerifiedIdentity::new(subject, claims.email))
    }
}
