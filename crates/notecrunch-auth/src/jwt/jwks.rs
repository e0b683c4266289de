//! In-memory cache of the identity provider's signing keys.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use jsonwebtoken::DecodingKey;
use jsonwebtoken::jwk::JwkSet;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use notecrunch_core::error::{AppError, ErrorKind};
use notecrunch_core::result::AppResult;

/// Shortest gap between two key set downloads triggered by unknown `kid`s.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Signing keys downloaded from a JWKS endpoint, keyed by `kid`.
///
/// Keys are fetched on first use and refetched when a token names a `kid`
/// the cache does not know, which covers provider key rotation. Refetches
/// are spaced at least [`MIN_REFRESH_INTERVAL`] apart.
pub struct JwksCache {
    url: String,
    http: reqwest::Client,
    keys: RwLock<HashMap<String, DecodingKey>>,
    /// When the last download was attempted. Held across a download so
    /// concurrent misses share one fetch.
    last_refresh: Mutex<Option<Instant>>,
}

impl std::fmt::Debug for JwksCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwksCache").field("url", &self.url).finish()
    }
}

impl JwksCache {
    /// Create an empty cache for `url`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build JWKS client", e)
            })?;

        Ok(Self {
            url: url.into(),
            http,
            keys: RwLock::new(HashMap::new()),
            last_refresh: Mutex::new(None),
        })
    }

    /// Return the key for `kid`, refreshing the set once if it is unknown.
    pub async fn key_for(&self, kid: &str) -> AppResult<DecodingKey> {
        if let Some(key) = self.cached(kid).await {
            return Ok(key);
        }

        let mut last_refresh = self.last_refresh.lock().await;

        // Another task may have refreshed while this one waited.
        if let Some(key) = self.cached(kid).await {
            return Ok(key);
        }

        match *last_refresh {
            Some(at) if at.elapsed() < MIN_REFRESH_INTERVAL => {
                debug!(kid = %kid, "Unknown kid within refresh cool-down");
            }
            _ => {
                *last_refresh = Some(Instant::now());
                self.refresh().await?;
            }
        }
        drop(last_refresh);

        self.cached(kid)
            .await
            .ok_or_else(|| AppError::authentication("Token signed with an unknown key"))
    }

    async fn cached(&self, kid: &str) -> Option<DecodingKey> {
        self.keys.read().await.get(kid).cloned()
    }

    /// Download the key set and replace the cached keys.
    async fn refresh(&self) -> AppResult<()> {
        let response = self.http.get(&self.url).send().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "JWKS fetch failed");
            AppError::authentication("Unable to verify token")
        })?;

        if !response.status().is_success() {
            warn!(url = %self.url, status = %response.status(), "JWKS endpoint returned an error");
            return Err(AppError::authentication("Unable to verify token"));
        }

        let set: JwkSet = response.json().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "JWKS body is not a key set");
            AppError::authentication("Unable to verify token")
        })?;

        let mut keys = HashMap::with_capacity(set.keys.len());
        for jwk in &set.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(e) => warn!(kid = %kid, error = %e, "Skipping unusable JWK"),
            }
        }

        debug!(url = %self.url, count = keys.len(), "Refreshed JWKS");
        *self.keys.write().await = keys;
        Ok(())
    }
}
