//! Client configuration, resolved once at process start.

use std::time::Duration;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Base URL used when `API_BASE_URL` is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Read-only settings handed to a transport constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout applied by the transport. `None` leaves it to the
    /// HTTP client's defaults.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Build from `API_BASE_URL`, falling back to the local development address.
    pub fn from_env() -> Self {
        Self::from_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_base_url(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
