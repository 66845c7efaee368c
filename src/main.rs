//! IOTA reference node entry point
//!
//! Resolves the configuration, starts the node and waits for a termination
//! signal to shut it down.

use std::path::Path;
use std::process;
use std::sync::{Arc, Mutex, PoisonError};

use log::{error, info};

use iri_bootstrap::bootstrap::{prepare_export_dirs, register_shutdown_hook};
use iri_bootstrap::common::init_logger;
use iri_bootstrap::config::{
    ArgumentResolver, ConfigStore, Resolution, SettingKey, EXIT_INIT_FAILURE,
};
use iri_bootstrap::Node;

/// Exit code for errors escaping argument resolution
const EXIT_RESOLUTION_ERROR: i32 = 1;

#[tokio::main]
async fn main() {
    init_logger("info");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let store = Arc::new(ConfigStore::new());

    match ArgumentResolver::new(&store).resolve(Some(args.as_slice())) {
        Ok(Resolution::Continue) => {}
        Ok(Resolution::Exit(code)) => process::exit(code),
        Err(e) => {
            error!("{}", e);
            process::exit(EXIT_RESOLUTION_ERROR);
        }
    }

    let node = Arc::new(Mutex::new(Node::with_defaults(Arc::clone(&store))));
    let shutdown_hook = register_shutdown_hook(Arc::clone(&node));

    if store.get_bool(SettingKey::Debug).unwrap_or(false) {
        info!("You have set the debug flag. To enable debug output, run with RUST_LOG=debug");
    }

    if let Err(e) = prepare_export_dirs(&store, Path::new(".")) {
        error!("Could not prepare export directories: {}", e);
    }

    let started = node.lock().unwrap_or_else(PoisonError::into_inner).start();
    if started.is_err() {
        process::exit(EXIT_INIT_FAILURE);
    }

    if let Err(e) = shutdown_hook.await {
        error!("Shutdown hook failed: {}", e);
    }
}
