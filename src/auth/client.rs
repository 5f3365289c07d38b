use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::WzConfig;
use crate::error::{HttpFailure, Result, WzError};

/// Successful body of the XSUAA token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub jti: Option<String>,
}

/// `{xsuaa_url}/oauth/token`, tolerating a trailing slash on the base URL.
pub fn token_url(xsuaa_url: &str) -> String {
    format!("{}/oauth/token", xsuaa_url.trim_end_matches('/'))
}

/// Exchanges stored user credentials for a bearer token (OAuth2 password grant).
pub struct XsuaaAuthClient {
    client: Client,
}

impl XsuaaAuthClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_access_token(&self, config: &WzConfig) -> Result<String> {
        let url = token_url(&config.xsuaa_url);
        debug!(
            "Requesting access token from {} with client_id {}",
            url, config.client_id
        );

        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "password"),
                ("client_id", config.client_id.as_str()),
                ("client_secret", config.client_secret.as_str()),
                ("username", config.user_id.as_str()),
                ("password", config.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WzError::Authentication(HttpFailure::transport(&e)))?;

        let status = response.status();
        debug!("Token request status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!("Could not read token error body: {}", e);
                String::new()
            });
            return Err(WzError::Authentication(HttpFailure::status(status, &body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| WzError::Authentication(HttpFailure::transport(&e)))?;

        if let Some(expires_in) = token.expires_in {
            debug!("Access token expires in {}s", expires_in);
        }

        token.access_token.ok_or_else(|| {
            WzError::Authentication(HttpFailure {
                status: Some(status),
                message: "No access_token in token response".to_string(),
                details: None,
            })
        })
    }
}

impl Default for XsuaaAuthClient {
    fn default() -> Self {
        Self::new()
    }
}
