//! IRI bootstrap: layered configuration for the IOTA reference node
//!
//! Settings come from three places: a compiled-in default table, an optional
//! INI overlay file (`iota.ini`, section `[IRI]`) and command line flags. The
//! overlay wins over everything else for the keys it defines; flags only
//! change keys the overlay leaves alone. The listening port is the exception:
//! it is read from the overlay first and falls back to `-p`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use iri_bootstrap::config::{ArgumentResolver, ConfigStore, Resolution, SettingKey};
//!
//! let store = Arc::new(ConfigStore::new());
//! let args = vec!["-p".to_string(), "14265".to_string()];
//!
//! match ArgumentResolver::new(&store).resolve(Some(args.as_slice())) {
//!     Ok(Resolution::Continue) => {
//!         assert_eq!(store.get(SettingKey::Port).unwrap(), "14265");
//!     }
//!     Ok(Resolution::Exit(code)) => std::process::exit(code),
//!     Err(e) => panic!("{}", e),
//! }
//! ```

// Public modules
pub mod bootstrap;
pub mod common;
pub mod config;
pub mod node;

// Re-export commonly used structures and functions for convenience
pub use bootstrap::Node;
pub use common::{NodeError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
