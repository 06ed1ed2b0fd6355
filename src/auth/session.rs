//! Two-step session handshake against the remote service
//!
//! A handshake is one short-lived cookie session: an unauthenticated GET to
//! the status endpoint yields the anti-forgery cookie, then a form-encoded
//! login on the same session exchanges the credentials for a bearer token.
//! A failed step propagates immediately; there are no retries here.

use crate::auth::token::CachedToken;
use crate::config::ConnectorConfig;
use crate::error::{ConnectorError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;

/// Cookie set by the status endpoint carrying the anti-forgery value
pub const CSRF_COOKIE: &str = "DSPACE-XSRF-COOKIE";

/// Request header carrying the anti-forgery value on the login call
pub const CSRF_HEADER: &str = "X-XSRF-TOKEN";

const STATUS_PATH: &str = "/server/api/authn/status";
const LOGIN_PATH: &str = "/server/api/authn/login";

/// Performs the CSRF-then-login handshake, producing a fresh bearer token
#[derive(Debug, Clone)]
pub struct SessionAuthenticator {
    config: ConnectorConfig,
}

impl SessionAuthenticator {
    /// Create an authenticator over the given credentials
    #[must_use]
    pub fn new(config: ConnectorConfig) -> Self {
        Self { config }
    }

    /// Build the client for one handshake. The cookie jar is what ties the
    /// login call to the CSRF fetch: the server associates the anti-forgery
    /// value with that cookie session.
    fn session_client(&self) -> Result<Client> {
        Client::builder()
            .cookie_store(true)
            .timeout(self.config.request_timeout)
            .build()
            .map_err(ConnectorError::from)
    }

    /// Fetch the anti-forgery token from the status endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Transport`] on I/O failure or a non-200
    /// status, and [`ConnectorError::AuthProtocol`] when the response does
    /// not carry the expected cookie.
    pub async fn fetch_csrf_token(&self, client: &Client) -> Result<String> {
        let endpoint = self.config.endpoint(STATUS_PATH);
        tracing::debug!("Fetching CSRF token from {endpoint}");

        let response = client.get(&endpoint).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ConnectorError::transport(format!(
                "Failed to obtain CSRF token. Status code: {}",
                status.as_u16()
            )));
        }

        response
            .cookies()
            .find(|cookie| cookie.name() == CSRF_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| ConnectorError::auth_protocol("CSRF token not found in cookies"))
    }

    /// Exchange the credentials for a bearer token.
    ///
    /// Must run on the same client as the CSRF fetch. The password is
    /// revealed only while the form body is being built.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Transport`] on I/O failure or a non-200
    /// status, and [`ConnectorError::AuthProtocol`] when the response lacks
    /// a well-formed `Authorization: Bearer` header.
    pub async fn login(&self, client: &Client, csrf_token: &str) -> Result<CachedToken> {
        let endpoint = self.config.endpoint(LOGIN_PATH);
        tracing::debug!("Requesting bearer token from {endpoint}");

        let params = [
            ("user", self.config.username.as_str()),
            ("password", self.config.password.expose_secret().as_str()),
        ];

        let response = client
            .post(&endpoint)
            .header(CSRF_HEADER, csrf_token)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ConnectorError::transport(format!(
                "Failed to obtain bearer token. Status code: {}",
                status.as_u16()
            )));
        }

        let token = response
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                ConnectorError::auth_protocol("Authorization header missing or invalid")
            })?;

        Ok(CachedToken::new(token, self.config.token_validity))
    }

    /// Run the full handshake: CSRF fetch, then login, on one fresh cookie
    /// session.
    ///
    /// The returned expiration is `now + token_validity`; the service does
    /// not report an actual token lifetime.
    ///
    /// # Errors
    ///
    /// Propagates the first failing step unchanged.
    pub async fn authenticate(&self) -> Result<CachedToken> {
        let client = self.session_client()?;
        let csrf_token = self.fetch_csrf_token(&client).await?;
        self.login(&client, &csrf_token).await
    }
}
