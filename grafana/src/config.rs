//! Connection settings for a Grafana instance.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the Grafana base URL.
pub const GRAFANA_URL_ENV: &str = "GRAFANA_URL";
/// Environment variable holding the bearer token.
pub const GRAFANA_TOKEN_ENV: &str = "GRAFANA_TOKEN";
/// Fallback environment variable for the bearer token.
pub const GRAFANA_TOKEN_ALT_ENV: &str = "GRAFANA_API_TOKEN";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base URL and credentials for one Grafana instance.
///
/// The base URL is stored without its trailing slashes so request paths can
/// be joined with exactly one separator. The value is immutable once built.
///
/// ## Examples
///
/// ```rust
/// use grafana::ClientConfig;
///
/// let config = ClientConfig::new("https://grafana.example.com/", "glsa_token").unwrap();
/// assert_eq!(config.base_url(), "https://grafana.example.com");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    token: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration from an explicit base URL and bearer token.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: impl AsRef<str>, token: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            base_url,
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads `GRAFANA_URL` and `GRAFANA_TOKEN`, falling back to
    /// `GRAFANA_API_TOKEN` for the token.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if a variable is unset, or
    /// [`ConfigError::InvalidUrl`] if the URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url =
            lookup(GRAFANA_URL_ENV).ok_or_else(|| ConfigError::missing_env(&[GRAFANA_URL_ENV]))?;
        let token = lookup(GRAFANA_TOKEN_ENV)
            .or_else(|| lookup(GRAFANA_TOKEN_ALT_ENV))
            .ok_or_else(|| ConfigError::missing_env(&[GRAFANA_TOKEN_ENV, GRAFANA_TOKEN_ALT_ENV]))?;
        Self::new(base_url, token)
    }

    /// Sets the per-request timeout applied by the transport.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Keeps the token out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
