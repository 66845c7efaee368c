//! Extension loader

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::ExtensionLoader;
use crate::common::Result;

/// Loads extension modules, one per subdirectory of the IXI directory
#[derive(Debug, Default)]
pub struct Ixi {
    dir: Option<PathBuf>,
    modules: Vec<String>,
}

impl Ixi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the discovered modules
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

impl ExtensionLoader for Ixi {
    fn init(&mut self, dir: &Path) -> Result<()> {
        self.dir = Some(dir.to_path_buf());

        if !dir.is_dir() {
            warn!("IXI directory {} not found, no extensions loaded", dir.display());
            return Ok(());
        }

        let mut modules = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                modules.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        modules.sort();

        info!("Loaded {} IXI module(s) from {}", modules.len(), dir.display());
        self.modules = modules;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        info!("Unloading {} IXI module(s)", self.modules.len());
        self.modules.clear();
        Ok(())
    }
}
