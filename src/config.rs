//! Connector configuration
//!
//! Credentials and policy knobs for one connector instance. The
//! configuration is immutable after construction; the password is held as a
//! [`SecretString`] and revealed only for the duration of a login call.

use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Validity window applied to freshly issued bearer tokens.
///
/// The service does not advertise a token lifetime, so one hour is assumed
/// as a conservative default. Override via
/// [`ConnectorConfig::builder`] when the deployment uses a different
/// session length.
pub const DEFAULT_TOKEN_VALIDITY: Duration = Duration::from_secs(3600);

/// Timeout applied to every network call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a connector instance
///
/// # Example
///
/// ```
/// use dspace_connector::ConnectorConfig;
///
/// let config = ConnectorConfig::builder()
///     .service_address("https://repository.example.org")
///     .username("admin@example.org")
///     .password(String::from("s3cret"))
///     .build();
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct ConnectorConfig {
    /// Base address of the remote service, e.g. `https://repository.example.org`
    #[builder(setter(into))]
    pub service_address: String,

    /// Username presented to the login endpoint
    #[builder(setter(into))]
    pub username: String,

    /// Password; never logged, never retained in decrypted form
    #[builder(setter(into))]
    pub password: SecretString,

    /// How long an issued token is trusted before the next call pays for a
    /// fresh handshake
    #[builder(default = DEFAULT_TOKEN_VALIDITY)]
    pub token_validity: Duration,

    /// Per-call network timeout; a timed-out call surfaces as a transport
    /// error
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
}

impl ConnectorConfig {
    /// Absolute URL for a path relative to the service base address
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.service_address.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ConnectorConfig {
        ConnectorConfig::builder()
            .service_address("https://repo.example.org/")
            .username("admin@example.org")
            .password(String::from("hunter2"))
            .build()
    }

    #[test]
    fn test_builder_defaults() {
        let config = config();
        assert_eq!(config.token_validity, DEFAULT_TOKEN_VALIDITY);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = config();
        assert_eq!(
            config.endpoint("/server/api/authn/status"),
            "https://repo.example.org/server/api/authn/status"
        );
    }

    #[test]
    fn test_password_not_exposed_by_debug() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("hunter2"));
    }
}
