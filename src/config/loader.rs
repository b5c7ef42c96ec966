use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/summarizer/config.toml` on Unix/macOS,
    /// or the platform equivalent via `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("summarizer").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The gateway bind address is a socket address
    /// - Upstream and gateway URLs are absolute http(s) URLs
    /// - Durations are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(invalid(format!(
                "gateway.bind_addr '{}' is not a socket address",
                self.gateway.bind_addr
            )));
        }

        validate_http_url("gateway.upstream_url", &self.gateway.upstream_url)?;
        validate_http_url("client.gateway_url", &self.client.gateway_url)?;

        if self.client.copy_ack_ms == 0 {
            return Err(invalid("client.copy_ack_ms must be greater than zero"));
        }
        if self.gateway.request_timeout_seconds == Some(0) {
            return Err(invalid("gateway.request_timeout_seconds must be greater than zero"));
        }
        if self.client.request_timeout_seconds == Some(0) {
            return Err(invalid("client.request_timeout_seconds must be greater than zero"));
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(invalid(format!(
            "{field} must use http or https, got '{}'",
            url.scheme()
        ))),
        Err(e) => Err(invalid(format!("{field} '{value}' is not a valid URL: {e}"))),
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
