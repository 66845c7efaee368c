//! Logging helpers
//!
//! Thin wrappers around `env_logger` and the `log` facade.

use log::LevelFilter;

/// Initialise the global logger
///
/// `RUST_LOG` wins over `level` when it is set.
pub fn init_logger(level: &str) {
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A second initialisation (tests, embedding hosts) is not an error.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Describe the state of the logging backend
///
/// Emitted when the node is started with `--debug`.
pub fn status_report() -> String {
    let max = log::max_level();
    format!(
        "Logger status: max level {}, debug output {}",
        max,
        if max >= LevelFilter::Debug { "enabled" } else { "disabled (set RUST_LOG=debug)" }
    )
}
