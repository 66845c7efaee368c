//! Configuration errors
//!
//! This module defines error types for the configuration module.

use std::path::PathBuf;

use thiserror::Error;

use super::keys::SettingKey;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither the overlay nor the in-memory table holds a value for the key
    #[error("No value configured for {0}")]
    MissingValue(SettingKey),

    /// A stored value does not parse as the requested type
    #[error("Invalid value for '{key}': '{value}' is not a valid {expected}")]
    Parse {
        key: SettingKey,
        value: String,
        expected: &'static str,
    },

    /// The overlay file exists but could not be read or parsed
    #[error("Error reading configuration file {}: {source}", path.display())]
    Overlay {
        path: PathBuf,
        #[source]
        source: ::config::ConfigError,
    },

    /// Command line could not be parsed
    #[error("CLI error: {0}")]
    Cli(#[from] clap::Error),
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
