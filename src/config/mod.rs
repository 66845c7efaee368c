//! Configuration module
//!
//! Layered settings for the node: compiled-in defaults and runtime writes live
//! in one mutable table, an optional INI overlay file shadows it, and the
//! command line is applied on top by [`ArgumentResolver`].
//!
//! Effective value of a key: the overlay's value when an overlay is loaded and
//! defines the key, otherwise the mutable table's value. Command line flags are
//! written into the mutable table, so a key the overlay defines keeps its
//! overlay value regardless of the flags.

// Submodules
mod defaults;
mod error;
mod keys;
mod source;
mod store;
pub mod cli;
pub mod resolver;

// Re-export types
pub use self::cli::CliOptions;
pub use self::error::{ConfigError, Result};
pub use self::keys::{SettingKey, UnknownSettingKey};
pub use self::resolver::{
    welcome, ArgumentResolver, Resolution, EXIT_INIT_FAILURE, EXIT_PARSE_ERROR, EXIT_USAGE,
};
pub use self::source::Overlay;
pub use self::store::ConfigStore;

// Export constants needed externally
pub use self::defaults::{
    default_value, DEFAULT_CONFIG_FILE, MAINNET_NAME, OVERLAY_SECTION, TESTNET_DB_LOG_PATH,
    TESTNET_DB_PATH, TESTNET_NAME,
};
