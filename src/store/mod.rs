// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared group store.
//!
//! The host app and the keyboard extension run in different processes
//! and exchange state through one key-value store. [`FileStore`] keeps
//! that store as a JSON object on disk and re-reads it on every access,
//! so writes made by the other process are always visible. When the
//! shared location is not provisioned, [`open_shared_store`] degrades to
//! a process-local [`MemoryStore`].

pub mod keys;

use crate::config::Config;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A synchronous key-value store holding JSON values.
///
/// Reads never fail: a missing or unreadable value is reported as `None`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn keys(&self) -> Vec<String>;

    /// Whether writes are visible to other processes.
    fn is_shared(&self) -> bool;

    fn describe(&self) -> String;
}

/// Store handle shared by the services of one process.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Typed accessors over [`KeyValueStore`].
pub trait StoreExt: KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(value) => Some(value),
            other => {
                debug!("{} holds {} instead of a string", key, other);
                None
            }
        }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(value) => Some(value),
            Value::Number(number) => number.as_i64().map(|n| n != 0),
            other => {
                debug!("{} holds {} instead of a bool", key, other);
                None
            }
        }
    }

    /// Decode a structured value.
    ///
    /// Accepts the value itself or a string holding its JSON text, the
    /// form the host app uses for encoded payloads.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        decode_json(key, self.get(key)?)
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, Value::String(value.to_string()))
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.set(key, Value::Bool(value))
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_value(value)
            .with_context(|| format!("encoding value for {}", key))?;
        self.set(key, encoded)
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}

/// Decode a stored value as `T`, unwrapping JSON text held in a string.
pub fn decode_json<T: DeserializeOwned>(key: &str, value: Value) -> Option<T> {
    let value = match value {
        Value::String(text) => match serde_json::from_str(&text) {
            Ok(inner) => inner,
            Err(err) => {
                debug!("{}: stored text is not JSON: {}", key, err);
                return None;
            }
        },
        other => other,
    };
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            debug!("{}: stored value does not decode: {}", key, err);
            None
        }
    }
}

// ─── In-memory store ────────────────────────────────────────────────

/// Process-local store used in tests and when the shared group is missing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Rc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.values.borrow().keys().cloned().collect()
    }

    fn is_shared(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "process-local memory store".to_string()
    }
}

// ─── File-backed shared store ───────────────────────────────────────

/// Shared group store persisted as a single JSON object file.
///
/// A write reads the whole file and renames an updated copy into place.
/// Nothing locks the file between the read and the rename, so two
/// processes writing at the same moment can lose one of the updates. A file that does not parse is never overwritten; writes
/// fail until it is repaired or removed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at `path`, creating its parent directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating shared group directory {}", parent.display()))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole store. A missing file is an empty store.
    pub fn read_all(&self) -> Result<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn read_for_update(&self) -> Result<Map<String, Value>> {
        self.read_all().context("refusing to overwrite the shared store")
    }

    fn write_all(&self, values: &Map<String, Value>) -> Result<()> {
        let payload = serde_json::to_string_pretty(values)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, payload)
            .with_context(|| format!("writing {}", staging.display()))?;
        fs::rename(&staging, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        match self.read_all() {
            Ok(mut values) => values.remove(key),
            Err(err) => {
                warn!("shared store unreadable, treating {} as absent: {:#}", key, err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut values = self.read_for_update()?;
        values.insert(key.to_string(), value);
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.read_for_update()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.read_all()
            .map(|values| values.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn is_shared(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        format!("shared group file {}", self.path.display())
    }
}

/// Open the shared group store described by `config`.
///
/// Falls back to a [`MemoryStore`] when no group location is configured
/// or it cannot be created; the keyboard keeps working, unsynchronized.
pub fn open_shared_store(config: &Config) -> SharedStore {
    let Some(path) = config.store_path() else {
        warn!("shared group {} is not provisioned, using a local store", config.group_id);
        return MemoryStore::shared();
    };
    match FileStore::open(&path) {
        Ok(store) => {
            debug!("using {}", store.describe());
            Rc::new(store)
        }
        Err(err) => {
            warn!("shared group unavailable ({:#}), using a local store", err);
            MemoryStore::shared()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.set_string("selected_language", "ru").unwrap();
        assert_eq!(store.get_string("selected_language").as_deref(), Some("ru"));
        store.remove("selected_language").unwrap();
        assert_eq!(store.get_string("selected_language"), None);
    }

    #[test]
    fn get_json_accepts_encoded_text() {
        let store = MemoryStore::new();
        store.set("a", json!(["x", "y"])).unwrap();
        store.set("b", json!("[\"x\",\"y\"]")).unwrap();
        store.set("c", json!("not json")).unwrap();
        assert_eq!(store.get_json::<Vec<String>>("a"), Some(vec!["x".into(), "y".into()]));
        assert_eq!(store.get_json::<Vec<String>>("b"), Some(vec!["x".into(), "y".into()]));
        assert_eq!(store.get_json::<Vec<String>>("c"), None);
    }

    #[test]
    fn get_bool_accepts_numbers() {
        let store = MemoryStore::new();
        store.set("on", json!(1)).unwrap();
        store.set("off", json!(false)).unwrap();
        store.set("junk", json!("maybe")).unwrap();
        assert_eq!(store.get_bool("on"), Some(true));
        assert_eq!(store.get_bool("off"), Some(false));
        assert_eq!(store.get_bool("junk"), None);
    }

    #[test]
    fn wrong_type_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("selected_language", json!(42)).unwrap();
        assert_eq!(store.get_string("selected_language"), None);
    }

    #[test]
    fn unprovisioned_group_degrades_to_memory() {
        let config = Config {
            group_id: "group.test".to_string(),
            group_dir: None,
        };
        let store = open_shared_store(&config);
        assert!(!store.is_shared());
        store.set_string("k", "v").unwrap();
        assert_eq!(store.get_string("k").as_deref(), Some("v"));
    }
}
