//! Session authentication for the remote service
//!
//! Implements the two-step handshake the service requires before any
//! authenticated call:
//!
//! 1. GET the status endpoint on a fresh cookie session; the response sets
//!    the `DSPACE-XSRF-COOKIE` anti-forgery cookie
//! 2. POST the credentials to the login endpoint with the anti-forgery
//!    value as a header, on the same cookie session; the response carries
//!    the bearer token in its `Authorization` header
//!
//! # Example
//!
//! ```no_run
//! use dspace_connector::auth::TokenManager;
//! use dspace_connector::ConnectorConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectorConfig::builder()
//!         .service_address("https://repository.example.org")
//!         .username("admin@example.org")
//!         .password(String::from("s3cret"))
//!         .build();
//!
//!     let tokens = TokenManager::new(config);
//!     let token = tokens.get_token().await?;
//!     println!("Bearer token valid until the configured window elapses: {token}");
//!     Ok(())
//! }
//! ```
//!
//! # Token Caching
//!
//! [`TokenManager`] caches the issued token in memory together with its
//! expiration instant and refreshes it lazily under a single lock, so
//! concurrent callers trigger at most one handshake per expiration cycle.
//!
//! # Security
//!
//! - The password is revealed only while the login form body is built
//! - The anti-forgery value and cookie session never outlive one handshake
//! - The expiration window is a local policy, not a server guarantee

mod manager;
mod session;
mod token;

pub use manager::TokenManager;
pub use session::{CSRF_COOKIE, CSRF_HEADER, SessionAuthenticator};
pub use token::CachedToken;
