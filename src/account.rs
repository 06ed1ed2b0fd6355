//! Account resource model for the remote user directory
//!
//! The service represents a user as an "ePerson": a handful of flat fields
//! plus a nested `metadata` map of `key -> [ { value } ]` entries holding
//! the qualified attributes (`eperson.firstname` and friends).

use serde::Deserialize;
use std::collections::HashMap;

/// Primary identifier attribute
pub const ATTR_ID: &str = "uuid";
/// Login name; `name` in the resource JSON
pub const ATTR_USERNAME: &str = "username";
/// Email address
pub const ATTR_EMAIL: &str = "email";
/// Whether the account may log in
pub const ATTR_CAN_LOG_IN: &str = "canLogIn";
/// Last activity timestamp, read-only
pub const ATTR_LAST_ACTIVE: &str = "lastActive";
/// Whether a client certificate is required
pub const ATTR_REQUIRE_CERTIFICATE: &str = "requireCertificate";
/// External network identifier
pub const ATTR_NET_ID: &str = "netid";
/// Whether the account self-registered
pub const ATTR_SELF_REGISTERED: &str = "selfRegistered";
/// Given name, stored under `metadata`
pub const ATTR_FIRST_NAME: &str = "eperson.firstname";
/// Family name, stored under `metadata`
pub const ATTR_LAST_NAME: &str = "eperson.lastname";
/// Embargo alert preference, stored under `metadata`
pub const ATTR_ALERT_EMBARGO: &str = "eperson.alert.embargo";
/// Preferred language, stored under `metadata`
pub const ATTR_LANGUAGE: &str = "eperson.language";
/// License acceptance flag, stored under `metadata`
pub const ATTR_LICENSE_ACCEPTED: &str = "eperson.license.accepted";
/// License acceptance date, stored under `metadata`
pub const ATTR_LICENSE_ACCEPTED_DATE: &str = "eperson.license.accepteddate";
/// ORCID scope, stored under `metadata`
pub const ATTR_ORCID_SCOPE: &str = "eperson.orcid.scope";
/// ORCID identifier, stored under `metadata`
pub const ATTR_ORCID: &str = "eperson.orcid";
/// Phone number, stored under `metadata`
pub const ATTR_PHONE: &str = "eperson.phone";

/// One value inside the resource `metadata` map
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataValue {
    /// The stored value
    pub value: String,
}

/// A user resource as returned by the service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Primary identifier assigned by the service
    pub uuid: String,

    /// Login name
    #[serde(default)]
    pub name: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,

    /// Whether the account may log in
    #[serde(default)]
    pub can_log_in: bool,

    /// Last activity timestamp
    #[serde(default)]
    pub last_active: Option<String>,

    /// Whether a client certificate is required
    #[serde(default)]
    pub require_certificate: bool,

    /// External network identifier
    #[serde(default)]
    pub netid: Option<String>,

    /// Whether the account self-registered
    #[serde(default)]
    pub self_registered: bool,

    /// Qualified attributes, keyed by names such as `eperson.firstname`
    #[serde(default)]
    pub metadata: HashMap<String, Vec<MetadataValue>>,
}

impl Account {
    /// First value stored under a metadata key, if any
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .and_then(|values| values.first())
            .map(|entry| entry.value.as_str())
    }
}

/// Search filter for account queries
///
/// The remote search surface is narrow: either one account by identifier or
/// the full listing.
#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    /// Restrict the search to one identifier
    pub by_uid: Option<String>,
}

impl AccountFilter {
    /// Match every account
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Match exactly the account with the given identifier
    #[must_use]
    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self {
            by_uid: Some(uid.into()),
        }
    }
}

/// Listing response page; accounts live under `_embedded.epersons`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPage {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedAccounts>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddedAccounts {
    #[serde(default)]
    pub epersons: Vec<Account>,
}
