//! Filesystem helpers

use std::fs;
use std::path::Path;

use log::{error, info};

/// Directory names created when transaction export is enabled
pub const EXPORT_DIRS: [&str; 2] = ["export", "export-solid"];

/// Create `dir` if it does not exist yet
///
/// Failures are logged and reported through the return value; they never abort
/// the caller.
pub fn ensure_dir(dir: &Path) -> bool {
    if dir.exists() {
        return true;
    }

    info!("Create directory '{}'", dir.display());
    match fs::create_dir(dir) {
        Ok(()) => true,
        Err(e) => {
            error!("Could not create directory {}: {}", dir.display(), e);
            false
        }
    }
}

/// Create the export directories under `base`
///
/// Returns how many of them exist afterwards.
pub fn create_export_dirs(base: &Path) -> usize {
    EXPORT_DIRS
        .iter()
        .filter(|name| ensure_dir(&base.join(name)))
        .count()
}
