//! Common module
//!
//! This module contains shared errors and utility functions used throughout the application.

pub mod error;
pub mod fs;
pub mod log;

// Re-export commonly used types and functions
pub use self::error::{NodeError, Result};
pub use self::fs::create_export_dirs;
pub use self::log::{init_logger, status_report};
