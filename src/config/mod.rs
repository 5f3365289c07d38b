//! Persisted wztools configuration

pub mod field;
pub mod store;

pub use field::ConfigField;
pub use store::ConfigStore;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Credentials and target identifiers for one Work Zone tenant.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WzConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_id: String,
    pub password: String,
    pub xsuaa_url: String,
    pub workzone_host: String,
    pub subdomain: String,
    pub subaccount_id: String,
}

impl WzConfig {
    /// Build a config by asking `value_of` for each field in prompt order.
    pub fn try_from_fields<F>(mut value_of: F) -> Result<Self>
    where
        F: FnMut(ConfigField) -> Result<String>,
    {
        Ok(Self {
            client_id: value_of(ConfigField::ClientId)?,
            client_secret: value_of(ConfigField::ClientSecret)?,
            user_id: value_of(ConfigField::UserId)?,
            password: value_of(ConfigField::Password)?,
            xsuaa_url: value_of(ConfigField::XsuaaUrl)?,
            workzone_host: value_of(ConfigField::WorkzoneHost)?,
            subdomain: value_of(ConfigField::Subdomain)?,
            subaccount_id: value_of(ConfigField::SubaccountId)?,
        })
    }

    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::ClientId => &self.client_id,
            ConfigField::ClientSecret => &self.client_secret,
            ConfigField::UserId => &self.user_id,
            ConfigField::Password => &self.password,
            ConfigField::XsuaaUrl => &self.xsuaa_url,
            ConfigField::WorkzoneHost => &self.workzone_host,
            ConfigField::Subdomain => &self.subdomain,
            ConfigField::SubaccountId => &self.subaccount_id,
        }
    }
}

// Secrets never reach logs through `{:?}`.
impl fmt::Debug for WzConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WzConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .field("xsuaa_url", &self.xsuaa_url)
            .field("workzone_host", &self.workzone_host)
            .field("subdomain", &self.subdomain)
            .field("subaccount_id", &self.subaccount_id)
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn sample_config() -> WzConfig {
    WzConfig {
        client_id: "sb-client!t123".to_string(),
        client_secret: "s3cr3t".to_string(),
        user_id: "jane@example.com".to_string(),
        password: "hunter2".to_string(),
        xsuaa_url: "https://acme.authentication.eu10.hana.ondemand.com".to_string(),
        workzone_host: "acme.dt.launchpad.cfapps.eu10.hana.ondemand.com".to_string(),
        subdomain: "acme".to_string(),
        subaccount_id: "0f8e2a6c-1111-2222-3333-444455556666".to_string(),
    }
}
