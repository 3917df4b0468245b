//! Configuration types for the ZinariPay client.
//!
//! These types describe how a [`ZinariClient`](crate::client::ZinariClient)
//! reaches the API. Loading them from files or the environment is left to
//! the embedding application.

pub mod transport;

pub use transport::TransportConfig;

use url::Url;

/// Errors raised when a configuration is structurally valid but unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("api key must not be empty")]
    EmptyApiKey,

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("base url {0} cannot be used as a base for endpoint paths")]
    UnusableBaseUrl(Url),
}

/// Everything needed to build a client: where the API lives, how to
/// authenticate, and how the shared HTTP transport behaves.
#[derive(Clone)]
pub struct ClientConfig {
    /// Root URL of the ZinariPay API. Endpoint paths are resolved against it.
    pub base_url: Url,
    /// The secret API key sent as a bearer token.
    pub api_key: String,
    /// Connection pool and timeout settings.
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Create a new ClientConfig with default transport settings.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            transport: TransportConfig::default(),
        }
    }

    /// Replace the transport settings.
    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    /// Check that the configuration can produce a working client.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if self.base_url.cannot_be_a_base() {
            return Err(ConfigError::UnusableBaseUrl(self.base_url.clone()));
        }
        self.transport.validate()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("transport", &self.transport)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.example.com").unwrap()
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new(base(), "sk_live_secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk_live_secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = ClientConfig::new(base(), "   ");
        assert!(matches!(config.validate(), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_validate_rejects_opaque_base_url() {
        let url = Url::parse("mailto:ops@example.com").unwrap();
        let config = ClientConfig::new(url, "key");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnusableBaseUrl(_))
        ));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(ClientConfig::new(base(), "key").validate().is_ok());
    }
}
