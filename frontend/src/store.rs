//! Best-effort key/value persistence on top of the browser's `localStorage`.
//!
//! Values are stored as JSON text. Reads fall back to a caller supplied value
//! whenever the key is missing, the text does not parse, or storage is
//! disabled. Writes never report failure to the caller.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no value stored under {0}")]
    NotFound(String),
    #[error("stored value is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("browser rejected storage access: {0}")]
    Rejected(String),
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::KeyNotFound(key) => StoreError::NotFound(key),
            StorageError::SerdeError(e) => StoreError::Corrupt(e),
            StorageError::JsError(e) => StoreError::Rejected(e.to_string()),
        }
    }
}

pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Value, StoreError>;
    fn write(&self, key: &str, value: &Value) -> Result<(), StoreError>;
}

/// `window.localStorage`, through gloo.
///
/// gloo throws into JS when storage is missing (private mode, disabled
/// cookies), so availability is checked before every call.
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .is_some()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Value, StoreError> {
        if !Self::available() {
            return Err(StoreError::Unavailable);
        }
        Ok(LocalStorage::get::<Value>(key)?)
    }

    fn write(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        if !Self::available() {
            return Err(StoreError::Unavailable);
        }
        Ok(LocalStorage::set(key, value)?)
    }
}

/// In-process backend. Stands in for `localStorage` when the browser has none,
/// so the visit still works without persisting. Holds raw JSON text so tests
/// can plant corrupt entries, and can reject writes like a full quota would.
#[derive(Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

#[cfg(test)]
impl MemoryBackend {
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries.borrow_mut().insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Value, StoreError> {
        let entries = self.entries.borrow();
        let raw = entries
            .get(key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        Ok(serde_json::from_str(raw)?)
    }

    fn write(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        if self.reject_writes.get() {
            return Err(StoreError::Rejected("quota exceeded".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), serde_json::to_string(value)?);
        Ok(())
    }
}

#[derive(Clone)]
pub struct Store {
    backend: Rc<dyn StorageBackend>,
    namespace: String,
}

impl Store {
    pub fn new(backend: Rc<dyn StorageBackend>, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    pub fn browser() -> Self {
        let backend: Rc<dyn StorageBackend> = if LocalStorageBackend::available() {
            Rc::new(LocalStorageBackend)
        } else {
            warn!("store: localStorage unavailable, keeping data in memory for this visit");
            Rc::new(MemoryBackend::default())
        };
        Self::new(backend, config::storage_namespace())
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }

    fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let value = self.backend.read(&self.key(key))?;
        Ok(serde_json::from_value(value)?)
    }

    /// Parsed value under `key`, or `fallback` on any failure.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_get(key) {
            Ok(value) => value,
            Err(StoreError::NotFound(_)) => fallback,
            Err(e) => {
                warn!("store: using fallback for {}: {}", key, e);
                fallback
            }
        }
    }

    /// Serializes and writes `value`. Failures are logged and dropped.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let result = serde_json::to_value(value)
            .map_err(StoreError::from)
            .and_then(|value| self.backend.write(&self.key(key), &value));
        if let Err(e) = result {
            warn!("store: dropped write to {}: {}", key, e);
        }
    }

    /// True when something other than `null` is stored under `key`, even a
    /// value that does not parse.
    pub fn has(&self, key: &str) -> bool {
        match self.backend.read(&self.key(key)) {
            Ok(value) => !value.is_null(),
            Err(StoreError::Corrupt(_)) => true,
            Err(_) => false,
        }
    }

    /// Ordered sequence under `key`, empty when absent or corrupt.
    pub fn get_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.get(key, Vec::new())
    }

    pub fn push<T: Serialize + DeserializeOwned>(&self, key: &str, item: T) {
        let mut items: Vec<T> = self.get_list(key);
        items.push(item);
        debug!("store: {} now holds {} item(s)", key, items.len());
        self.set(key, &items);
    }

    pub fn same_backend(&self, other: &Store) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend) && self.namespace == other.namespace
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.same_backend(other)
    }
}

#[cfg(test)]
pub fn memory_store() -> (Store, Rc<MemoryBackend>) {
    let backend = Rc::new(MemoryBackend::default());
    (Store::new(backend.clone(), ""), backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_returns_fallback() {
        let (store, _) = memory_store();
        assert!(!store.get("billingYearly", false));
        assert_eq!(store.get("cookiePref", None::<String>), None);
    }

    #[test]
    fn set_then_get_parses_json() {
        let (store, backend) = memory_store();
        store.set("billingYearly", &true);
        assert_eq!(backend.raw("billingYearly").as_deref(), Some("true"));
        assert!(store.get("billingYearly", false));
    }

    #[test]
    fn corrupt_value_returns_fallback() {
        let (store, backend) = memory_store();
        backend.insert_raw("leads", "{not json");
        let leads: Vec<Value> = store.get_list("leads");
        assert!(leads.is_empty());
    }

    #[test]
    fn wrong_shape_reads_as_empty_list() {
        let (store, backend) = memory_store();
        backend.insert_raw("events", "{\"type\":\"x\"}");
        let events: Vec<Value> = store.get_list("events");
        assert!(events.is_empty());
    }

    #[test]
    fn rejected_write_is_swallowed() {
        let (store, backend) = memory_store();
        store.set("cookiePref", &"accepted");
        backend.reject_writes(true);
        store.set("cookiePref", &"declined");
        assert_eq!(store.get("cookiePref", String::new()), "accepted");
    }

    #[test]
    fn has_counts_unparseable_text_as_present() {
        let (store, backend) = memory_store();
        assert!(!store.has("cookiePref"));
        backend.insert_raw("cookiePref", "null");
        assert!(!store.has("cookiePref"));
        backend.insert_raw("cookiePref", "yes");
        assert!(store.has("cookiePref"));
    }

    #[test]
    fn push_appends_in_order() {
        let (store, _) = memory_store();
        store.push("events", "a".to_string());
        store.push("events", "b".to_string());
        assert_eq!(store.get_list::<String>("events"), vec!["a", "b"]);
    }

    #[test]
    fn namespace_prefixes_keys() {
        let backend = Rc::new(MemoryBackend::default());
        let store = Store::new(backend.clone(), "dev.");
        store.set("leads", &Vec::<String>::new());
        assert!(backend.raw("dev.leads").is_some());
        assert!(backend.raw("leads").is_none());
    }
}
