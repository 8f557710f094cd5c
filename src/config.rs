//! Runtime configuration: which service proxy backs the operation groups.
//!
//! The composition contract lives here: exactly one proxy implementation
//! is built per configuration and injected into every operation group.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::proxy::{HttpProxy, ServiceProxy};
use crate::search;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

/// Root configuration container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Which backend answers proxy calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    /// "simulated" or "http".
    #[serde(default)]
    pub mode: ProxyMode,
    /// Base location for http mode, e.g. "https://api.example.com".
    pub base_url: Option<String>,
    /// Simulated latency window in milliseconds, e.g. [20, 80].
    pub latency_ms: Option<[u64; 2]>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            mode: ProxyMode::Simulated,
            base_url: None,
            latency_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyMode {
    #[default]
    Simulated,
    Http,
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - http mode names a base URL
    /// - a latency window, if present, is not inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.proxy.mode == ProxyMode::Http && self.proxy.base_url.is_none() {
            return Err(ConfigError::Validation {
                message: "http mode requires proxy.base_url".to_string(),
            });
        }

        if let Some([min, max]) = self.proxy.latency_ms {
            if min > max {
                return Err(ConfigError::Validation {
                    message: format!("latency window [{min}, {max}] is inverted"),
                });
            }
        }

        Ok(())
    }
}

/// Build the single proxy implementation every operation group shares.
///
/// Simulated mode wires the demo catalog routes; http mode passes through
/// to the configured base location.
pub fn select_proxy(config: &Config) -> Result<Arc<dyn ServiceProxy>, ConfigError> {
    match config.proxy.mode {
        ProxyMode::Simulated => {
            tracing::info!("using simulated backend");
            let mut proxy = search::demo_catalog();
            if let Some([min, max]) = config.proxy.latency_ms {
                proxy = proxy.with_latency(min..=max);
            }
            Ok(Arc::new(proxy))
        }
        ProxyMode::Http => {
            let base_url = self::base_url(config)?;
            tracing::info!(base_url, "using http backend");
            Ok(Arc::new(HttpProxy::new(base_url)))
        }
    }
}

fn base_url(config: &Config) -> Result<&str, ConfigError> {
    config
        .proxy
        .base_url
        .as_deref()
        .ok_or_else(|| ConfigError::Validation {
            message: "http mode requires proxy.base_url".to_string(),
        })
}
