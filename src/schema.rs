//! Attribute catalog for the account object class
//!
//! Mirrors what the remote service accepts and returns per attribute, so a
//! hosting identity platform can publish the object class without probing
//! the service.

use crate::account::{
    ATTR_ALERT_EMBARGO, ATTR_CAN_LOG_IN, ATTR_EMAIL, ATTR_FIRST_NAME, ATTR_ID, ATTR_LANGUAGE,
    ATTR_LAST_ACTIVE, ATTR_LAST_NAME, ATTR_LICENSE_ACCEPTED, ATTR_LICENSE_ACCEPTED_DATE,
    ATTR_NET_ID, ATTR_ORCID, ATTR_ORCID_SCOPE, ATTR_PHONE, ATTR_REQUIRE_CERTIFICATE,
    ATTR_SELF_REGISTERED, ATTR_USERNAME,
};

/// Capability flags for one account attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeInfo {
    /// Attribute name as it appears on the wire
    pub name: &'static str,
    /// Must be present on create
    pub required: bool,
    /// May be set on create
    pub creatable: bool,
    /// May be replaced on update
    pub updateable: bool,
    /// Returned on read
    pub readable: bool,
}

impl AttributeInfo {
    const fn new(
        name: &'static str,
        required: bool,
        creatable: bool,
        updateable: bool,
        readable: bool,
    ) -> Self {
        Self {
            name,
            required,
            creatable,
            updateable,
            readable,
        }
    }
}

/// Attribute catalog of the account object class
///
/// The identifier is server-assigned (required but neither creatable nor
/// updateable); `lastActive` is read-only; `canLogIn` can only be changed
/// after creation.
#[must_use]
pub fn account_schema() -> Vec<AttributeInfo> {
    vec![
        AttributeInfo::new(ATTR_ID, true, false, false, true),
        AttributeInfo::new(ATTR_USERNAME, true, true, true, true),
        AttributeInfo::new(ATTR_EMAIL, true, true, true, true),
        AttributeInfo::new(ATTR_FIRST_NAME, false, true, true, true),
        AttributeInfo::new(ATTR_LAST_NAME, false, true, true, true),
        AttributeInfo::new(ATTR_CAN_LOG_IN, false, false, true, true),
        AttributeInfo::new(ATTR_LAST_ACTIVE, false, false, false, true),
        AttributeInfo::new(ATTR_REQUIRE_CERTIFICATE, false, true, true, true),
        AttributeInfo::new(ATTR_NET_ID, false, true, true, true),
        AttributeInfo::new(ATTR_SELF_REGISTERED, false, true, true, true),
        AttributeInfo::new(ATTR_ALERT_EMBARGO, false, true, true, true),
        AttributeInfo::new(ATTR_LANGUAGE, false, true, true, true),
        AttributeInfo::new(ATTR_LICENSE_ACCEPTED, false, true, true, true),
        AttributeInfo::new(ATTR_LICENSE_ACCEPTED_DATE, false, true, true, true),
        AttributeInfo::new(ATTR_ORCID_SCOPE, false, true, true, true),
        AttributeInfo::new(ATTR_ORCID, false, true, true, true),
        AttributeInfo::new(ATTR_PHONE, false, true, true, true),
    ]
}
