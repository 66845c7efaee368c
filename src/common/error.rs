//! Error handling module
//!
//! This module defines the error types and result type aliases used in the application.

use thiserror::Error;
use std::io;

use crate::config::ConfigError;

/// Node bootstrap error type
#[derive(Error, Debug)]
pub enum NodeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A collaborator failed during `init()`
    #[error("{component} failed to initialise: {reason}")]
    Init {
        component: &'static str,
        reason: String,
    },

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias
///
/// This is a `Result` type alias that uses our custom `NodeError`.
pub type Result<T> = std::result::Result<T, NodeError>;
