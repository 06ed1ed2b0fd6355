//! Error types for the DSpace connector

use thiserror::Error;

/// Main error type for connector operations
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Network or I/O failure, timeout, or an unexpected status during the
    /// authentication handshake
    #[error("Transport error: {0}")]
    Transport(String),

    /// Expected cookie or header absent or malformed during the handshake
    #[error("Authentication protocol error: {0}")]
    AuthProtocol(String),

    /// Remote service rejected the request as malformed (HTTP 400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Remote service denied the operation (HTTP 401 or 403)
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Target resource does not exist (HTTP 404); maps to "unknown identity"
    /// at the domain layer
    #[error("Unknown identity: {0}")]
    NotFound(String),

    /// Resource already exists (HTTP 409)
    #[error("Already exists: {0}")]
    Conflict(String),

    /// Any other non-success status, carrying the original status code
    #[error("Remote service error (status {status}): {message}")]
    RemoteService {
        /// HTTP status code returned by the service
        status: u16,
        /// Reason phrase and response body, when readable
        message: String,
    },

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, ConnectorError>;

impl ConnectorError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an authentication protocol error
    pub fn auth_protocol(msg: impl Into<String>) -> Self {
        Self::AuthProtocol(msg.into())
    }

    /// Classify a non-success HTTP response into a typed error.
    ///
    /// The message carries the status line and, when readable, the response
    /// body, so domain callers surface the remote detail unchanged.
    #[must_use]
    pub fn from_status(status: u16, reason: &str, body: &str) -> Self {
        let mut message = format!("HTTP error {status}: {reason}");
        if !body.is_empty() {
            message.push_str(". Response body: ");
            message.push_str(body);
        }

        match status {
            400 => Self::BadRequest(message),
            401 | 403 => Self::PermissionDenied(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            _ => Self::RemoteService { status, message },
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
