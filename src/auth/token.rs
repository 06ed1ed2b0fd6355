//! Cached bearer token state

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Current unix time in whole seconds
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
}

/// A bearer token together with the instant it stops being trusted
///
/// Invariant: `expires_at` is always `issued time + validity window`. The
/// token is never evicted; it is treated as stale once the current time
/// reaches `expires_at` and replaced on the next acquisition.
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// Opaque token value attached to authenticated calls
    pub value: String,

    /// Unix timestamp (seconds) from which the token is considered stale
    pub expires_at: u64,
}

impl CachedToken {
    /// Create a token issued now and valid for the given window
    #[must_use]
    pub fn new(value: impl Into<String>, valid_for: Duration) -> Self {
        Self {
            value: value.into(),
            expires_at: unix_now() + valid_for.as_secs(),
        }
    }

    /// Check whether the token is stale at the current time
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(unix_now())
    }

    /// Check whether the token is stale at the given unix time
    #[must_use]
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    /// Get the `Authorization` header value
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.value)
    }
}
