//! Configuration model.
//!
//! The configuration file is optional; every field has a default so a missing
//! file or a partial file both work.

use serde::{Deserialize, Serialize};

/// Default REST Countries API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

/// Upstream API settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the country-data API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RootConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [api]
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 5);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
    }
}
