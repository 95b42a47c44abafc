//! Rate provider configuration, read from the environment

use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const ENV_RATES_URL: &str = "TRAVELER_RATES_URL";
const ENV_API_KEY: &str = "TRAVELER_API_KEY";
const ENV_TIMEOUT_SECS: &str = "TRAVELER_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no exchange-rate API key configured (set TRAVELER_API_KEY)")]
    MissingApiKey,

    #[error("invalid TRAVELER_TIMEOUT_SECS '{0}': expected a positive whole number of seconds")]
    InvalidTimeout(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Where and how to fetch exchange rates
#[derive(Clone)]
pub struct RatesConfig {
    /// Endpoint base; requests go to `{base_url}/{api_key}/latest/{BASE}`
    pub base_url: String,
    pub api_key: Option<String>,
    /// Bound on a single request
    pub timeout: Duration,
}

impl RatesConfig {
    /// Read `TRAVELER_RATES_URL`, `TRAVELER_API_KEY` and `TRAVELER_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = RatesConfig::default();

        if let Some(url) = lookup(ENV_RATES_URL).filter(|s| !s.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }

        config.api_key = lookup(ENV_API_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout(raw));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        RatesConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// The key is a credential: keep it out of logs.
impl fmt::Debug for RatesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatesConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
