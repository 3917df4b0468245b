//! TOML file configuration structures.
//!
//! These structs directly map to the `zinari.toml` file format.

use serde::{Deserialize, Serialize};
use url::Url;
use zinari_sdk::config::transport::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_POOL_IDLE_TIMEOUT, DEFAULT_POOL_MAX_IDLE_PER_HOST,
    DEFAULT_TIMEOUT,
};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub transport: TransportConfig,
}

/// API access section. Both values can also come from the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the ZinariPay API.
    pub base_url: Option<Url>,
    /// Secret API key.
    pub api_key: Option<String>,
}

/// HTTP transport section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_pool_idle_timeout_secs")]
    pub pool_idle_timeout_secs: u64,
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            pool_idle_timeout_secs: default_pool_idle_timeout_secs(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT.as_secs()
}

fn default_pool_idle_timeout_secs() -> u64 {
    DEFAULT_POOL_IDLE_TIMEOUT.as_secs()
}

fn default_pool_max_idle_per_host() -> usize {
    DEFAULT_POOL_MAX_IDLE_PER_HOST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let toml_str = r#"
[api]
base_url = "https://api.example.com"
api_key = "sk_test_123"

[transport]
timeout_secs = 30
connect_timeout_secs = 3
pool_idle_timeout_secs = 45
pool_max_idle_per_host = 8
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.unwrap().as_str(),
            "https://api.example.com/"
        );
        assert_eq!(config.api.api_key.as_deref(), Some("sk_test_123"));
        assert_eq!(config.transport.timeout_secs, 30);
        assert_eq!(config.transport.pool_max_idle_per_host, 8);
    }

    #[test]
    fn test_transport_section_defaults() {
        let toml_str = r#"
[api]
api_key = "sk_test_123"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.api.base_url.is_none());
        assert_eq!(config.transport.timeout_secs, 60);
        assert_eq!(config.transport.connect_timeout_secs, 5);
        assert_eq!(config.transport.pool_idle_timeout_secs, 90);
        assert_eq!(config.transport.pool_max_idle_per_host, 100);
    }

    #[test]
    fn test_partial_transport_section() {
        let toml_str = r#"
[transport]
timeout_secs = 15
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.transport.timeout_secs, 15);
        assert_eq!(config.transport.connect_timeout_secs, 5);
    }
}
