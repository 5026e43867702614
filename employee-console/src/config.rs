use employee_client::{ClientConfig, DEFAULT_BASE_URL};

/// Console configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | EMPLOYEE_API_URL | https://localhost:7099/api/Employee | Employee resource URL |
/// | REQUEST_TIMEOUT_MS | (none) | Per-request timeout; unset waits indefinitely |
/// | LOG_LEVEL | info | level or `EnvFilter` directives |
/// | LOG_DIR | (none) | Write daily rolling log files here instead of stderr |
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout_ms: Option<u64>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: var("EMPLOYEE_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            request_timeout_ms: var("REQUEST_TIMEOUT_MS").and_then(|v| v.parse().ok()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone());
        match self.request_timeout_ms {
            Some(ms) => config.with_timeout_ms(ms),
            None => config,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
