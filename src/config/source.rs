//! Overlay source
//!
//! Loads the optional on-disk key/value file that shadows the in-memory
//! settings. The file is INI formatted; only the `[IRI]` section is consulted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat, Map, Value};
use log::{debug, info};

use super::defaults::OVERLAY_SECTION;
use super::error::{ConfigError, Result};
use super::keys::SettingKey;

/// Parsed contents of an overlay file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    path: PathBuf,
    /// Section entries, keys upper-cased
    values: HashMap<String, String>,
}

impl Overlay {
    /// Load the overlay at `path`
    ///
    /// A missing file is the ordinary "no overlay" outcome and yields
    /// `Ok(None)`. A file that exists but cannot be read or parsed is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            debug!("No configuration file at {}", path.display());
            return Ok(None);
        }

        info!("Loading configuration file {}", path.display());

        let overlay_err = |source: ::config::ConfigError| ConfigError::Overlay {
            path: path.to_path_buf(),
            source,
        };

        let root = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Ini))
            .build()
            .and_then(|cfg| cfg.try_deserialize::<Map<String, Value>>())
            .map_err(overlay_err)?;

        let mut values = HashMap::new();
        for (name, value) in root {
            if !name.eq_ignore_ascii_case(OVERLAY_SECTION) {
                continue;
            }
            let Ok(section) = value.into_table() else {
                continue;
            };
            for (key, value) in section {
                let value = value.into_string().map_err(overlay_err)?;
                values.insert(key.to_ascii_uppercase(), value);
            }
        }

        debug!("Configuration file defines {} entries", values.len());

        Ok(Some(Self {
            path: path.to_path_buf(),
            values,
        }))
    }

    /// Path the overlay was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value the overlay defines for `key`, if any
    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.values.get(key.name()).map(String::as_str)
    }

    /// Number of entries in the overlay section
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let overlay = Overlay::load(dir.path().join("absent.ini")).unwrap();
        assert!(overlay.is_none());
    }

    #[test]
    fn test_reads_iri_section_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("iota.ini");
        fs::write(
            &path,
            "[IRI]\nPORT = 14265\nNEIGHBORS = udp://10.0.0.1:14600\nUNKNOWN = x\n\n\
             [OTHER]\nDB_PATH = elsewhere\n",
        )
        .unwrap();

        let overlay = Overlay::load(&path).unwrap().expect("overlay should load");
        assert_eq!(overlay.path(), path.as_path());
        assert_eq!(overlay.get(SettingKey::Port), Some("14265"));
        assert_eq!(overlay.get(SettingKey::Neighbors), Some("udp://10.0.0.1:14600"));
        assert_eq!(overlay.get(SettingKey::DbPath), None);
        assert_eq!(overlay.len(), 3);
    }

    #[test]
    fn test_directory_path_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Overlay::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Overlay { .. })));
    }
}
