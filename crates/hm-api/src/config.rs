use serde::Deserialize;

/// Deployment environment, selects log format and defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Whether pretty development logging applies
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Whether JSON production logging applies
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Server configuration, read from environment variables
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    /// `ENV`: development or production
    #[serde(default)]
    pub env: Environment,
    /// `HOST`: bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// `PORT`: bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// `METRICS_ENABLED`: install the Prometheus recorder and serve `/metrics`
    #[serde(default)]
    pub metrics_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            host: default_host(),
            port: default_port(),
            metrics_enabled: false,
        }
    }
}

impl ApiConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Read the configuration from an explicit list of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// `host:port` to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn test_reads_variables() {
        let config = ApiConfig::from_vars(vars(&[
            ("ENV", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("METRICS_ENABLED", "true"),
        ]))
        .unwrap();

        assert!(config.env.is_production());
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert!(config.metrics_enabled);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(ApiConfig::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }
}
