//! HTTP transport configuration.

use std::time::Duration;

use super::ConfigError;

/// Overall timeout for one request, connection to last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout for establishing a connection, TLS handshake included.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long an idle pooled connection is kept alive.
pub const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Upper bound on idle pooled connections per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Settings for the pooled HTTP client shared by every API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub pool_max_idle_per_host: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            pool_idle_timeout: DEFAULT_POOL_IDLE_TIMEOUT,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        }
    }
}

impl TransportConfig {
    /// Reject zero timeouts, which would fail every request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroValue("timeout"));
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroValue("connect_timeout"));
        }
        Ok(())
    }

    /// Build the pooled `reqwest::Client` described by this configuration.
    ///
    /// Keep-alive, response decompression and proxy detection from the
    /// environment stay at reqwest's defaults, which are all enabled.
    #[cfg(feature = "client")]
    pub fn build_http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.pool_max_idle_per_host, 100);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = TransportConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroValue("timeout"))
        ));
    }
}
