//! Client configuration.

use std::time::Duration;

use crate::error::{Result, StorageError};

/// Default storage endpoint.
pub const DEFAULT_BASE_URL: &str = "https://storage.example.com";

/// Default timeout for HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_STORAGE_URL: &str = "BUCKETLIB_STORAGE_URL";
const ENV_TIMEOUT_SECS: &str = "BUCKETLIB_TIMEOUT_SECS";
const ENV_PROXY: &str = "BUCKETLIB_PROXY";

/// Configuration for the storage client.
///
/// Built once and shared read-only by every request the client issues.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the storage service (without the `/v2/...` suffix).
    pub base_url: String,
    /// Timeout applied to each HTTP request.
    pub timeout: Duration,
    /// User-Agent header sent with requests.
    pub user_agent: String,
    /// Optional proxy URL (e.g., "http://proxy:8080").
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: Self::default_user_agent(),
            proxy: None,
        }
    }
}

impl ClientConfig {
    fn default_user_agent() -> String {
        format!("bucketlib/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Create a configuration pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Build a configuration from `BUCKETLIB_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_STORAGE_URL) {
            config.base_url = url;
        }
        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.parse().map_err(|_| {
                StorageError::InvalidConfig(format!("{ENV_TIMEOUT_SECS} must be an integer"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(proxy) = std::env::var(ENV_PROXY) {
            if !proxy.is_empty() {
                config.proxy = Some(proxy);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Route every request through a proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Returns the effective timeout, using default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        }
    }

    /// Returns the effective user agent, using default if empty.
    pub fn effective_user_agent(&self) -> String {
        if self.user_agent.is_empty() {
            Self::default_user_agent()
        } else {
            self.user_agent.clone()
        }
    }

    /// Check that the base URL parses as an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            StorageError::InvalidConfig(format!("invalid base URL {}: {}", self.base_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(StorageError::InvalidConfig(format!(
                "unsupported URL scheme: {}",
                other
            ))),
        }
    }

    /// Base URL without a trailing slash.
    pub(crate) fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
