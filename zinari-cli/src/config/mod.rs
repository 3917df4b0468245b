//! Configuration module for the zinari CLI.
//!
//! Reads the TOML file, applies command-line and environment overrides, and
//! produces a validated [`ClientConfig`].

pub mod file;

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use url::Url;
use zinari_sdk::{ClientConfig, TransportConfig};

use crate::config::file::{FileConfig, TransportConfig as FileTransportConfig};

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("missing {0}: set it in the config file or pass it on the command line")]
    MissingField(&'static str),

    #[error("validation error: {0}")]
    ValidationError(#[from] zinari_sdk::config::ConfigError),
}

/// Configuration loader combining the file with command-line overrides.
pub struct ConfigLoader {
    config_path: PathBuf,
    base_url_override: Option<Url>,
    api_key_override: Option<String>,
}

impl ConfigLoader {
    pub fn new(
        config_path: impl AsRef<Path>,
        base_url_override: Option<Url>,
        api_key_override: Option<String>,
    ) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            base_url_override,
            api_key_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file, unless it is absent and both overrides are set
    /// 2. Apply the overrides
    /// 3. Validate the result
    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        let file_config = self.read_file()?;
        self.build(file_config)
    }

    fn read_file(&self) -> Result<FileConfig, ConfigError> {
        let overrides_complete =
            self.base_url_override.is_some() && self.api_key_override.is_some();
        if overrides_complete && !self.config_path.exists() {
            tracing::debug!(
                path = %self.config_path.display(),
                "Config file not found, using command-line values"
            );
            return Ok(FileConfig::default());
        }

        let config_content = std::fs::read_to_string(&self.config_path)?;
        Ok(toml::from_str(&config_content)?)
    }

    fn build(&self, file_config: FileConfig) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url_override
            .clone()
            .or(file_config.api.base_url)
            .ok_or(ConfigError::MissingField("base_url"))?;
        let api_key = self
            .api_key_override
            .clone()
            .or(file_config.api.api_key)
            .ok_or(ConfigError::MissingField("api_key"))?;

        let config = ClientConfig::new(base_url, api_key)
            .with_transport(convert_transport(&file_config.transport));
        config.validate()?;
        Ok(config)
    }
}

fn convert_transport(t: &FileTransportConfig) -> TransportConfig {
    TransportConfig {
        timeout: Duration::from_secs(t.timeout_secs),
        connect_timeout: Duration::from_secs(t.connect_timeout_secs),
        pool_idle_timeout: Duration::from_secs(t.pool_idle_timeout_secs),
        pool_max_idle_per_host: t.pool_max_idle_per_host,
    }
}
