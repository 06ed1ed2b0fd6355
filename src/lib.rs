//! # DSpace Identity-Provisioning Connector
//!
//! Bridges an identity-management platform to the DSpace REST user
//! directory: account CRUD and search over HTTP, with the service's
//! session-cookie/CSRF/JWT authentication handled transparently.
//! Async/await, strong typing, tokio-based.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dspace_connector::{AccountFilter, ConnectorConfig, DspaceConnector};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectorConfig::builder()
//!         .service_address("https://repository.example.org")
//!         .username("admin@example.org")
//!         .password(String::from("s3cret"))
//!         .build();
//!
//!     let connector = DspaceConnector::new(config);
//!     connector.test_connection().await?;
//!
//!     for account in connector.search_accounts(&AccountFilter::all()).await? {
//!         println!("{} <{}>", account.uuid, account.email.unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! The service requires a two-step handshake before any authenticated call:
//! a CSRF cookie fetched from the status endpoint, then a form-encoded
//! login yielding a bearer token in the response `Authorization` header.
//! The connector caches that token with a configurable validity window
//! (one hour by default) and refreshes it lazily under a single lock, so
//! any number of concurrent operations trigger at most one handshake per
//! expiration cycle. See the [`auth`] module.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, ConnectorError>`](Result).
//! Non-success HTTP statuses are classified into a typed taxonomy:
//! [`ConnectorError::NotFound`] for unknown identities,
//! [`ConnectorError::Conflict`] for already-existing accounts,
//! [`ConnectorError::PermissionDenied`] for 401/403, and so on, each
//! carrying the original status and response body text. Nothing in this
//! crate retries; failures propagate to the caller unchanged.
//!
//! ## Architecture
//!
//! - [`config`]: credentials and policy knobs for one connector instance
//! - [`auth`]: handshake, token cache, and single-flight acquisition
//! - [`executor`]: authenticated request execution and error classification
//! - [`account`]: the account resource shape and search filter
//! - [`schema`]: attribute catalog of the account object class
//! - [`connector`]: the CRUD/search facade a hosting platform drives
//! - [`error`]: error types and handling
//!
//! ## Logging
//!
//! This crate uses [`tracing`](https://crates.io/crates/tracing) for
//! structured logging. Events are always emitted but are zero-cost when no
//! subscriber is attached. To see logs, attach a subscriber in your
//! application:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Passwords are never logged; the secret is revealed only while the login
//! form body is built.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod account;
pub mod auth;
pub mod config;
pub mod connector;
pub mod error;
pub mod executor;
pub mod schema;

// Re-export commonly used types
pub use account::{Account, AccountFilter, MetadataValue};
pub use auth::{CachedToken, SessionAuthenticator, TokenManager};
pub use config::{ConnectorConfig, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TOKEN_VALIDITY};
pub use connector::{DspaceConnector, GROUPS_ENDPOINT, USERS_ENDPOINT};
pub use error::{ConnectorError, Result};
pub use executor::RequestExecutor;
pub use reqwest::Method;
pub use schema::{AttributeInfo, account_schema};

/// Version of the connector
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
