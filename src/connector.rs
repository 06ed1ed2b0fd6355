//! Domain operations on accounts
//!
//! Translates create, update, delete and search on account objects into
//! authenticated REST calls against the user-directory endpoints. Errors
//! from the execution layer surface unchanged, so a hosting platform can
//! map [`ConnectorError::NotFound`](crate::error::ConnectorError::NotFound)
//! to "unknown identity" and
//! [`ConnectorError::Conflict`](crate::error::ConnectorError::Conflict) to
//! "already exists".

use crate::account::{Account, AccountFilter, SearchPage};
use crate::config::ConnectorConfig;
use crate::error::Result;
use crate::executor::RequestExecutor;
use reqwest::Method;
use serde_json::{Map, Value};

/// Users collection endpoint, relative to the service base address
pub const USERS_ENDPOINT: &str = "/server/api/eperson/epersons";

/// Groups collection endpoint; reserved for role operations, not used by
/// any current operation
pub const GROUPS_ENDPOINT: &str = "/server/api/eperson/groups";

/// Connector facade over the remote user directory
#[derive(Debug)]
pub struct DspaceConnector {
    executor: RequestExecutor,
}

impl DspaceConnector {
    /// Create a connector for one configured service instance
    #[must_use]
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            executor: RequestExecutor::new(config),
        }
    }

    /// Request executor backing this connector
    #[must_use]
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Create an account from an attribute map.
    ///
    /// Returns the server-assigned identifier.
    ///
    /// # Errors
    ///
    /// Surfaces [`ConnectorError::Conflict`](crate::error::ConnectorError::Conflict)
    /// when the account already
    /// exists, or any other classified error from the execution layer.
    pub async fn create_account(&self, attributes: Map<String, Value>) -> Result<String> {
        tracing::debug!("Creating account with {} attributes", attributes.len());

        let response = self
            .executor
            .execute_json(Method::POST, USERS_ENDPOINT, &Value::Object(attributes))
            .await?;
        let created: Account = serde_json::from_value(response)?;

        tracing::debug!("Created account {}", created.uuid);
        Ok(created.uuid)
    }

    /// Replace attributes of an existing account.
    ///
    /// # Errors
    ///
    /// Surfaces [`ConnectorError::NotFound`](crate::error::ConnectorError::NotFound)
    /// for an unknown identifier.
    pub async fn update_account(
        &self,
        uid: &str,
        attributes: Map<String, Value>,
    ) -> Result<String> {
        tracing::debug!("Updating account {uid}");

        let path = format!("{USERS_ENDPOINT}/{uid}");
        let response = self
            .executor
            .execute_json(Method::PUT, &path, &Value::Object(attributes))
            .await?;
        let updated: Account = serde_json::from_value(response)?;

        Ok(updated.uuid)
    }

    /// Delete an account by identifier.
    ///
    /// # Errors
    ///
    /// Surfaces [`ConnectorError::NotFound`](crate::error::ConnectorError::NotFound)
    /// for an unknown identifier.
    pub async fn delete_account(&self, uid: &str) -> Result<()> {
        tracing::debug!("Deleting account {uid}");

        let path = format!("{USERS_ENDPOINT}/{uid}");
        self.executor.execute(Method::DELETE, &path).await?;
        Ok(())
    }

    /// Fetch one account by identifier.
    ///
    /// # Errors
    ///
    /// Surfaces [`ConnectorError::NotFound`](crate::error::ConnectorError::NotFound)
    /// for an unknown identifier.
    pub async fn get_account(&self, uid: &str) -> Result<Account> {
        tracing::debug!("Fetching account {uid}");

        let path = format!("{USERS_ENDPOINT}/{uid}");
        let body = self.executor.execute(Method::GET, &path).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Search accounts: one account when the filter names an identifier,
    /// the full listing otherwise.
    ///
    /// # Errors
    ///
    /// Surfaces any classified error from the execution layer.
    pub async fn search_accounts(&self, filter: &AccountFilter) -> Result<Vec<Account>> {
        match &filter.by_uid {
            Some(uid) => {
                tracing::debug!("Searching for account {uid}");
                Ok(vec![self.get_account(uid).await?])
            }
            None => {
                tracing::debug!("Listing accounts");
                let body = self.executor.execute(Method::GET, USERS_ENDPOINT).await?;
                let page: SearchPage = serde_json::from_str(&body)?;
                Ok(page
                    .embedded
                    .map(|embedded| embedded.epersons)
                    .unwrap_or_default())
            }
        }
    }

    /// Verify connectivity: acquire a bearer token, then probe the users
    /// endpoint.
    ///
    /// # Errors
    ///
    /// Surfaces the handshake or probe failure unchanged.
    pub async fn test_connection(&self) -> Result<()> {
        tracing::debug!("Testing service connectivity");

        self.executor.tokens().get_token().await?;
        self.executor.execute(Method::GET, USERS_ENDPOINT).await?;
        Ok(())
    }
}
