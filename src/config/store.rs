//! Layered configuration store
//!
//! Holds the compiled-in defaults together with runtime writes in one mutable
//! map, and an optional overlay loaded from disk. Lookups prefer the overlay:
//! a key the overlay defines is never answered from the mutable map, even if
//! `set` was called for it afterwards.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use log::debug;

use super::defaults;
use super::error::{ConfigError, Result};
use super::keys::SettingKey;
use super::source::Overlay;

/// Default table plus runtime overrides, shadowed by an optional overlay file
///
/// All operations take `&self`; the store is meant to be shared as
/// `Arc<ConfigStore>` once bootstrap is done.
#[derive(Debug)]
pub struct ConfigStore {
    values: RwLock<BTreeMap<SettingKey, String>>,
    overlay: RwLock<Option<Overlay>>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Create a store populated with the compiled-in defaults and no overlay
    pub fn new() -> Self {
        let values = defaults::defaults()
            .map(|(key, value)| (key, value.to_string()))
            .collect();

        Self {
            values: RwLock::new(values),
            overlay: RwLock::new(None),
        }
    }

    /// (Re)load the overlay from the path in the effective `CONFIG` value
    ///
    /// Returns whether a file was found and loaded. A successful load replaces
    /// any previous overlay entirely; a missing file leaves it in place.
    pub fn load_overlay(&self) -> Result<bool> {
        let path = PathBuf::from(self.get(SettingKey::Config)?);
        let Some(overlay) = Overlay::load(&path)? else {
            return Ok(false);
        };

        *self.overlay.write().unwrap_or_else(PoisonError::into_inner) = Some(overlay);

        Ok(true)
    }

    /// Whether an overlay is currently loaded
    pub fn has_overlay(&self) -> bool {
        self.overlay
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Overlay value for `key`, bypassing the mutable map
    pub fn overlay_raw(&self, key: SettingKey) -> Option<String> {
        self.overlay
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(|overlay| overlay.get(key))
            .map(str::to_string)
    }

    /// Effective value of `key`
    pub fn get(&self, key: SettingKey) -> Result<String> {
        if let Some(value) = self.overlay_raw(key) {
            return Ok(value);
        }

        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .ok_or(ConfigError::MissingValue(key))
    }

    /// Write `value` into the mutable map
    ///
    /// The overlay is left untouched, so `get` keeps returning the overlay
    /// value for keys it defines.
    pub fn set(&self, key: SettingKey, value: impl Into<String>) {
        let value = value.into();
        debug!("Setting {} with {}", key, value);
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }

    pub fn get_f32(&self, key: SettingKey) -> Result<f32> {
        self.parse(key, "float")
    }

    pub fn get_f64(&self, key: SettingKey) -> Result<f64> {
        self.parse(key, "double")
    }

    pub fn get_i32(&self, key: SettingKey) -> Result<i32> {
        self.parse(key, "integer")
    }

    pub fn get_u16(&self, key: SettingKey) -> Result<u16> {
        self.parse(key, "port number")
    }

    /// Effective value of `key` as a boolean
    ///
    /// Accepts `true` and `false` in any ASCII case.
    pub fn get_bool(&self, key: SettingKey) -> Result<bool> {
        let value = self.get(key)?;
        match value.trim() {
            v if v.eq_ignore_ascii_case("true") => Ok(true),
            v if v.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(ConfigError::Parse {
                key,
                value,
                expected: "boolean",
            }),
        }
    }

    fn parse<T: FromStr>(&self, key: SettingKey, expected: &'static str) -> Result<T> {
        let value = self.get(key)?;
        value.trim().parse().map_err(|_| ConfigError::Parse {
            key,
            value,
            expected,
        })
    }

    /// Render every key of the mutable map with its effective value
    ///
    /// One line per key, in key order.
    pub fn dump_all(&self) -> String {
        let keys: Vec<SettingKey> = self
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();

        let mut settings = String::new();
        for key in keys {
            let value = self.get(key).unwrap_or_default();
            let _ = writeln!(settings, "Set '{}'\t -> {}", key, value);
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn store_with_overlay(contents: &str) -> (tempfile::TempDir, ConfigStore) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("iota.ini");
        fs::write(&path, contents).unwrap();

        let store = ConfigStore::new();
        store.set(SettingKey::Config, path.to_string_lossy());
        assert!(store.load_overlay().unwrap());
        (dir, store)
    }

    #[test]
    fn test_defaults() {
        let store = ConfigStore::new();
        assert_eq!(store.get(SettingKey::Port).unwrap(), "14600");
        assert_eq!(store.get(SettingKey::ApiHost).unwrap(), "localhost");
        assert_eq!(store.get(SettingKey::DbPath).unwrap(), "mainnetdb");
        assert!(!store.has_overlay());
    }

    #[test]
    fn test_set_then_get_without_overlay() {
        let store = ConfigStore::new();
        store.set(SettingKey::MaxPeers, "8");
        assert_eq!(store.get(SettingKey::MaxPeers).unwrap(), "8");
        assert_eq!(store.get_i32(SettingKey::MaxPeers).unwrap(), 8);
    }

    #[test]
    fn test_overlay_shadows_set() {
        let (_dir, store) = store_with_overlay("[IRI]\nMAX_PEERS = 3\n");

        store.set(SettingKey::MaxPeers, "8");
        assert_eq!(store.get(SettingKey::MaxPeers).unwrap(), "3");
        assert_eq!(store.overlay_raw(SettingKey::MaxPeers).as_deref(), Some("3"));
        assert_eq!(store.overlay_raw(SettingKey::Port), None);
    }

    #[test]
    fn test_key_without_default() {
        let store = ConfigStore::new();
        assert!(matches!(
            store.get(SettingKey::Coordinator),
            Err(ConfigError::MissingValue(SettingKey::Coordinator))
        ));

        store.set(
            SettingKey::Coordinator,
            "KPWCHICGJZXKE9GSUDXZYUAPLHAKAHYHDXNPHENTERYMMBQOPSQIDENXKLKCEYCPVTZQLEEJVYJZV9BWU",
        );
        assert!(store.get(SettingKey::Coordinator).is_ok());
    }

    #[test]
    fn test_typed_getters() {
        let store = ConfigStore::new();
        assert_eq!(store.get_f32(SettingKey::PSelectMilestoneChild).unwrap(), 0.7);
        assert_eq!(store.get_f64(SettingKey::SendLimit).unwrap(), -1.0);
        assert_eq!(store.get_u16(SettingKey::TcpReceiverPort).unwrap(), 15600);
        assert!(!store.get_bool(SettingKey::Testnet).unwrap());

        store.set(SettingKey::Testnet, "TRUE");
        assert!(store.get_bool(SettingKey::Testnet).unwrap());
    }

    #[test]
    fn test_malformed_value_fails_on_read() {
        let store = ConfigStore::new();
        store.set(SettingKey::MaxDepth, "deep");
        store.set(SettingKey::Export, "yes");

        assert!(matches!(
            store.get_i32(SettingKey::MaxDepth),
            Err(ConfigError::Parse { key: SettingKey::MaxDepth, .. })
        ));
        assert!(store.get_bool(SettingKey::Export).is_err());
        // The raw string is still readable
        assert_eq!(store.get(SettingKey::MaxDepth).unwrap(), "deep");
    }

    #[test]
    fn test_dump_all_uses_effective_values() {
        let (_dir, store) = store_with_overlay("[IRI]\nDB_PATH = overlaydb\n");
        store.set(SettingKey::DbPath, "cli-db");

        let dump = store.dump_all();
        assert_eq!(dump.lines().count(), SettingKey::ALL.len() - 1);
        assert!(dump.contains("Set 'DB_PATH'\t -> overlaydb"));
        assert!(!dump.contains("cli-db"));
        assert!(dump.contains("Set 'PORT'\t -> 14600"));
    }

    #[test]
    fn test_reload_replaces_overlay() {
        let (dir, store) = store_with_overlay("[IRI]\nPORT = 1\nMAX_DEPTH = 5\n");

        let second = dir.path().join("second.ini");
        fs::write(&second, "[IRI]\nPORT = 2\n").unwrap();
        store.set(SettingKey::Config, second.to_string_lossy());
        assert!(store.load_overlay().unwrap());

        assert_eq!(store.get(SettingKey::Port).unwrap(), "2");
        assert_eq!(store.get(SettingKey::MaxDepth).unwrap(), "15");
    }

    #[test]
    fn test_reload_to_missing_file_keeps_overlay() {
        let (dir, store) = store_with_overlay("[IRI]\nPORT = 1\n");

        store.set(SettingKey::Config, dir.path().join("gone.ini").to_string_lossy());
        assert!(!store.load_overlay().unwrap());
        assert!(store.has_overlay());
        assert_eq!(store.get(SettingKey::Port).unwrap(), "1");
        assert_eq!(store.overlay_raw(SettingKey::Port).as_deref(), Some("1"));
    }
}
