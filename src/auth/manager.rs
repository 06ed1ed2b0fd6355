//! Thread-safe bearer token acquisition
//!
//! Serves a non-expired token to any number of concurrent callers while
//! running the handshake at most once per expiration cycle. Expiry is
//! detected lazily: the call immediately following expiration pays the
//! handshake latency, nothing refreshes in the background.

use crate::auth::session::SessionAuthenticator;
use crate::auth::token::{CachedToken, unix_now};
use crate::config::ConnectorConfig;
use crate::error::Result;
use tokio::sync::Mutex;

/// Caches the current bearer token and refreshes it on demand
#[derive(Debug)]
pub struct TokenManager {
    authenticator: SessionAuthenticator,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenManager {
    /// Create a manager with an empty cache
    #[must_use]
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            authenticator: SessionAuthenticator::new(config),
            cached: Mutex::new(None),
        }
    }

    /// Get a non-expired token, refreshing it first when absent or stale.
    ///
    /// The check and the refresh form one critical section: while a
    /// handshake is in flight every other caller waits on the lock and then
    /// observes its result instead of starting a redundant handshake.
    ///
    /// # Errors
    ///
    /// Propagates the handshake failure unchanged; the cached state is left
    /// untouched so the next call re-attempts.
    pub async fn get_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if !token.is_expired_at(unix_now()) {
                tracing::debug!("Reusing cached bearer token");
                return Ok(token.value.clone());
            }
            tracing::debug!("Cached bearer token is stale, running handshake");
        }

        let fresh = self.authenticator.authenticate().await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }
}
