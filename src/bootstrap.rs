//! Node bootstrap
//!
//! Owns the resolved store and the three collaborators, initialises them in
//! order and shuts them down in reverse order.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use log::{error, info};
use tokio::signal;
use tokio::task::JoinHandle;

use crate::common::{create_export_dirs, NodeError, Result};
use crate::config::{ConfigStore, SettingKey};
use crate::node::{Api, ExtensionLoader, Iota, Ixi, NodeComponent};

/// The running node
pub struct Node {
    store: Arc<ConfigStore>,
    iota: Box<dyn NodeComponent>,
    api: Box<dyn NodeComponent>,
    ixi: Box<dyn ExtensionLoader>,
}

impl Node {
    pub fn new(
        store: Arc<ConfigStore>,
        iota: Box<dyn NodeComponent>,
        api: Box<dyn NodeComponent>,
        ixi: Box<dyn ExtensionLoader>,
    ) -> Self {
        Self {
            store,
            iota,
            api,
            ixi,
        }
    }

    /// Build the default collaborators: business logic, extension loader, API
    pub fn with_defaults(store: Arc<ConfigStore>) -> Self {
        let iota = Box::new(Iota::new(Arc::clone(&store)));
        let ixi = Box::new(Ixi::new());
        let api = Box::new(Api::new(Arc::clone(&store)));
        Self::new(store, iota, api, ixi)
    }

    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Initialise business logic, then the API, then the extension loader
    ///
    /// Stops at the first failure.
    pub fn init(&mut self) -> Result<()> {
        self.iota.init()?;
        self.api.init()?;

        let ixi_dir = self.store.get(SettingKey::IxiDir)?;
        self.ixi.init(Path::new(&ixi_dir))?;

        info!("IOTA Node initialised correctly.");
        Ok(())
    }

    /// Initialise the node, tearing everything down again if that fails
    ///
    /// On failure the full [`Node::shutdown`] runs before the init error is
    /// returned, so collaborators that did come up are released.
    pub fn start(&mut self) -> Result<()> {
        let err = match self.init() {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        error!("Exception during IOTA node initialisation: {}", err);
        let failures = self.shutdown();
        if !failures.is_empty() {
            error!("Shutdown finished with {} failure(s)", failures.len());
        }
        Err(err)
    }

    /// Shut down every collaborator in reverse init order
    ///
    /// A failing component is logged and skipped; the remaining ones are still
    /// shut down. Returns the failures.
    pub fn shutdown(&mut self) -> Vec<NodeError> {
        info!("Shutting down IOTA node, please hold tight...");

        let mut failures = Vec::new();

        if let Err(e) = self.ixi.shutdown() {
            error!("Exception occurred shutting down IXI: {}", e);
            failures.push(e);
        }
        for component in [&mut self.api, &mut self.iota] {
            if let Err(e) = component.shutdown() {
                error!("Exception occurred shutting down {}: {}", component.name(), e);
                failures.push(e);
            }
        }

        failures
    }
}

/// Create the export directories under `base` when `EXPORT` is effectively true
///
/// Returns how many export directories exist afterwards (0 when disabled).
pub fn prepare_export_dirs(store: &ConfigStore, base: &Path) -> Result<usize> {
    if !store.get_bool(SettingKey::Export)? {
        return Ok(0);
    }
    Ok(create_export_dirs(base))
}

/// Wait for Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(err) => error!("failed to install Ctrl+C handler: {}", err),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => error!("failed to install SIGTERM handler: {}", err),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT"),
        _ = terminate => info!("received SIGTERM"),
    }
}

/// Spawn the task that shuts `node` down once a termination signal arrives
///
/// The shutdown itself runs on a blocking thread.
pub fn register_shutdown_hook(node: Arc<Mutex<Node>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        shutdown_signal().await;

        let result = tokio::task::spawn_blocking(move || {
            node.lock().unwrap_or_else(PoisonError::into_inner).shutdown()
        })
        .await;

        match result {
            Ok(failures) if failures.is_empty() => info!("Shutdown complete"),
            Ok(failures) => error!("Shutdown finished with {} failure(s)", failures.len()),
            Err(e) => error!("Shutdown task failed: {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_disabled_by_default() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new();

        assert_eq!(prepare_export_dirs(&store, dir.path()).unwrap(), 0);
        assert!(!dir.path().join("export").exists());
    }

    #[test]
    fn test_export_enabled() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new();
        store.set(SettingKey::Export, "true");

        assert_eq!(prepare_export_dirs(&store, dir.path()).unwrap(), 2);
        assert!(dir.path().join("export-solid").is_dir());
    }

    #[test]
    fn test_default_node_lifecycle() {
        let dir = tempdir().unwrap();
        let store = Arc::new(ConfigStore::new());
        store.set(SettingKey::ApiHost, "127.0.0.1");
        store.set(SettingKey::IxiDir, dir.path().join("ixi").to_string_lossy());

        let mut node = Node::with_defaults(store);
        node.init().unwrap();
        assert!(node.shutdown().is_empty());
    }
}
