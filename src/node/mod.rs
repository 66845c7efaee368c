//! Node collaborators
//!
//! The components the resolved configuration is handed to. Each follows the
//! same lifecycle: constructed from the store, `init()` once, `shutdown()`
//! once. The bootstrap drives them through [`crate::bootstrap::Node`].

mod api;
mod iota;
mod ixi;

pub use self::api::Api;
pub use self::iota::{Iota, NodeSettings};
pub use self::ixi::Ixi;

use std::path::Path;

use crate::common::Result;

/// Lifecycle of the business-logic and API components
pub trait NodeComponent: Send {
    /// Name used in log lines and errors
    fn name(&self) -> &'static str;

    fn init(&mut self) -> Result<()>;

    fn shutdown(&mut self) -> Result<()>;
}

/// Lifecycle of the extension loader
///
/// Unlike [`NodeComponent`], initialisation needs the extension directory.
pub trait ExtensionLoader: Send {
    fn init(&mut self, dir: &Path) -> Result<()>;

    fn shutdown(&mut self) -> Result<()>;
}
