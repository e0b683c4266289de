//! Token verification configuration.

use serde::{Deserialize, Serialize};

/// How bearer tokens are verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenMode {
    /// RS256 tokens verified against the identity provider's JWKS.
    Jwks,
    /// HS256 tokens verified with a shared secret (development and tests).
    SharedSecret,
}

/// Authentication configuration for the external identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Verification mode.
    #[serde(default = "default_mode")]
    pub mode: TokenMode,
    /// Expected `iss` claim. Also the base of the default JWKS URL.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Explicit JWKS URL, overriding `{issuer}/.well-known/jwks.json`.
    #[serde(default)]
    pub jwks_url: Option<String>,
    /// Expected `client_id` claim (app client of the user pool).
    #[serde(default)]
    pub client_id: Option<String>,
    /// HMAC secret for `shared_secret` mode.
    #[serde(default)]
    pub jwt_secret: String,
    /// Reject tokens whose `token_use` claim is not `access`.
    #[serde(default = "default_true")]
    pub require_access_token: bool,
    /// Clock skew tolerance in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Timeout for the JWKS download in seconds.
    #[serde(default = "default_jwks_timeout")]
    pub jwks_timeout_seconds: u64,
}

impl AuthConfig {
    /// The JWKS URL to fetch signing keys from, if one can be determined.
    pub fn resolved_jwks_url(&self) -> Option<String> {
        self.jwks_url.clone().or_else(|| {
            self.issuer
                .as_ref()
                .map(|iss| format!("{}/.well-known/jwks.json", iss.trim_end_matches('/')))
        })
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            issuer: None,
            jwks_url: None,
            client_id: None,
            jwt_secret: String::new(),
            require_access_token: default_true(),
            leeway_seconds: default_leeway(),
            jwks_timeout_seconds: default_jwks_timeout(),
        }
    }
}

fn default_mode() -> TokenMode {
    TokenMode::Jwks
}

fn default_true() -> bool {
    true
}

fn default_leeway() -> u64 {
    30
}

fn default_jwks_timeout() -> u64 {
    10
}
