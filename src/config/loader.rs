//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("downstream URL must be http or https, got scheme {0:?}")]
    InvalidDownstream(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RelayConfig = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Semantic checks on top of serde's syntactic validation.
fn validate(config: &RelayConfig) -> Result<(), ConfigError> {
    match config.downstream.url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidDownstream(other.to_string())),
    }
}
