//! Client configuration

use std::time::Duration;

/// Employee resource URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://localhost:7099/api/Employee";

/// Client configuration for connecting to the Employee API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Employee resource URL (e.g., "https://localhost:7099/api/Employee")
    pub base_url: String,

    /// Request timeout in milliseconds; `None` waits indefinitely
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, millis: u64) -> Self {
        self.timeout_ms = Some(millis);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<super::NetworkHttpClient> {
        super::NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
