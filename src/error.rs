//! Error types shared by the configuration store and the HTTP clients.

use reqwest::StatusCode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by wztools operations.
#[derive(Debug, Error)]
pub enum WzError {
    /// No configuration file at the expected location.
    #[error("Configuration file not found at {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration file exists but could not be read or parsed.
    #[error("Failed to load configuration from {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Directory or file creation/write failure.
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// Token endpoint returned a non-2xx status or was unreachable.
    #[error("Failed to get access token: {0}")]
    Authentication(HttpFailure),

    /// Cache invalidation endpoint returned a non-2xx status or was unreachable.
    #[error("Failed to clear cache: {0}")]
    CacheClear(HttpFailure),

    /// A configuration value failed its field rule.
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("Missing values for {flags} and stdin is not a terminal to prompt for them")]
    NonInteractive { flags: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WzError>;

/// Details of a failed HTTP exchange.
///
/// `status` is absent for transport failures (DNS, connection refused, TLS).
/// `details` holds the response body when the server sent one, pretty-printed
/// if it was JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    pub status: Option<StatusCode>,
    pub message: String,
    pub details: Option<String>,
}

impl HttpFailure {
    pub fn transport(err: &reqwest::Error) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
            details: None,
        }
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status: Some(status),
            message: format!("Request failed with status code {}", status.as_u16()),
            details: render_body(body),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status.map(|s| s.as_u16())
    }

    pub fn status_text(&self) -> Option<&'static str> {
        self.status.and_then(|s| s.canonical_reason())
    }

    /// Multi-line diagnostic block for terminal display.
    pub fn diagnostic(&self) -> String {
        let mut out = String::new();
        if let Some(status) = self.status {
            out.push_str(&format!(
                "Status: {} {}\n",
                status.as_u16(),
                self.status_text().unwrap_or_default()
            ));
        }
        out.push_str(&format!("Message: {}", self.message));
        if let Some(details) = &self.details {
            out.push_str(&format!("\nDetails: {}", details));
        }
        out
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(
                f,
                "{} {}: {}",
                status.as_u16(),
                self.status_text().unwrap_or_default(),
                self.message
            ),
            None => write!(f, "{}", self.message),
        }
    }
}

fn render_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => serde_json::to_string_pretty(&value).ok(),
        Err(_) => Some(trimmed.to_string()),
    }
}
