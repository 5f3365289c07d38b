use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::config::WzConfig;
use crate::error::{HttpFailure, Result, WzError};

const PROVIDER_ID: &str = "saas_approuter";
const CONTENT_ADDITION_MODE: &str = "manual";
const PROVIDER_PATH: &str = "/semantic/entity/provider/html5";

/// Body of the HTML5 content provider refresh call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCacheRequest {
    pub provider_id: String,
    pub content_addition_mode: String,
    pub subdomain: String,
    pub subaccount_id: String,
}

impl ClearCacheRequest {
    pub fn for_config(config: &WzConfig) -> Self {
        Self {
            provider_id: PROVIDER_ID.to_string(),
            content_addition_mode: CONTENT_ADDITION_MODE.to_string(),
            subdomain: config.subdomain.clone(),
            subaccount_id: config.subaccount_id.clone(),
        }
    }
}

/// A 2xx answer from the provider endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCacheOutcome {
    pub status: StatusCode,
}

impl ClearCacheOutcome {
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }
}

/// Triggers cache invalidation of the Work Zone HTML5 content provider.
pub struct WorkZoneClient {
    client: Client,
    scheme: String,
}

impl WorkZoneClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            scheme: "https".to_string(),
        }
    }

    /// Override the URL scheme (plain `http` against local test servers).
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn endpoint(&self, workzone_host: &str) -> String {
        format!("{}://{}{}", self.scheme, workzone_host, PROVIDER_PATH)
    }

    pub async fn clear_cache(
        &self,
        config: &WzConfig,
        access_token: &str,
    ) -> Result<ClearCacheOutcome> {
        let url = self.endpoint(&config.workzone_host);
        let payload = ClearCacheRequest::for_config(config);
        debug!("Posting cache refresh to {}: {:?}", url, payload);

        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| WzError::CacheClear(HttpFailure::transport(&e)))?;

        let status = response.status();
        debug!("Cache refresh status: {}", status);

        if status.is_success() {
            info!("Work Zone cache cleared for subaccount {}", config.subaccount_id);
            return Ok(ClearCacheOutcome { status });
        }

        let body = response.text().await.unwrap_or_else(|e| {
            debug!("Could not read cache refresh error body: {}", e);
            String::new()
        });
        Err(WzError::CacheClear(HttpFailure::status(status, &body)))
    }
}

impl Default for WorkZoneClient {
    fn default() -> Self {
        Self::new()
    }
}
