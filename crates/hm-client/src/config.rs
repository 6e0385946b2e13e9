use std::time::Duration;

use serde::Deserialize;

/// Prefix of every client environment variable
pub const ENV_PREFIX: &str = "HM_";

/// Shortest per request timeout; lower configured values are raised to it
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Client configuration, read from `HM_*` environment variables
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    /// `HM_API_BASE_URL`: root of the topic API, e.g. `https://api.hummet.app`
    pub api_base_url: String,
    /// `HM_API_TIMEOUT_SECS`: per request timeout, at least one second
    #[serde(default = "default_timeout_secs")]
    pub api_timeout_secs: u64,
    /// `HM_DATABASE_URL`: profile database, profiles are kept in memory when unset
    #[serde(default)]
    pub database_url: Option<String>,
    /// `HM_DATABASE_MAX_CONNECTIONS`
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_connections() -> u32 {
    5
}

impl ClientConfig {
    /// Configuration with defaults for everything but the base URL
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            api_timeout_secs: default_timeout_secs(),
            database_url: None,
            database_max_connections: default_max_connections(),
        }
    }

    /// Read `HM_*` variables from the process environment
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Read `HM_*` variables from the given pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    /// Per request timeout, never below [`MIN_API_TIMEOUT_SECS`]
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs.max(MIN_API_TIMEOUT_SECS))
    }
}
