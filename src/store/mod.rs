//! Client-side key-value persistence.
//!
//! Web front-ends get local/session storage from the browser; this crate gets
//! the equivalent through the [`KvStore`] trait so hosts can plug in whatever
//! backing they have (in-memory, disk, a WASM shim over `window.localStorage`).
//!
//! Two logical stores exist per client:
//! - the **durable** store: auth tokens + user profile, survives restarts
//! - the **session** store: in-progress recharge flow state, scoped to one tab
//!
//! Storage faults are non-fatal by contract: a failed read degrades to
//! "no cached value", writes are fire-and-forget. Nothing in this layer
//! returns an error.

pub mod auth;

pub use auth::AuthStore;

use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Raw string key-value backing. Infallible by contract.
pub trait KvStore: Send + Sync {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// In-memory store. The default backing for native clients and tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        match self.entries.lock() {
            Ok(map) => map.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set_raw(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.remove(key);
        }
    }

    fn clear(&self) {
        if let Ok(mut map) = self.entries.lock() {
            map.clear();
        }
    }
}

/// Store that drops writes and answers every read with `None`.
///
/// The analog of running without browser storage (server-side rendering):
/// callers see "no cached value" instead of a failure.
pub struct NullStore;

impl KvStore for NullStore {
    fn get_raw(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_raw(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}

    fn clear(&self) {}
}

/// Shared handle over a [`KvStore`] adding JSON (de)serialization.
#[derive(Clone)]
pub struct Store {
    backing: Arc<dyn KvStore>,
}

impl Store {
    pub fn new(backing: Arc<dyn KvStore>) -> Self {
        Self { backing }
    }

    /// In-memory store, mostly for tests and native defaults.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.backing.get_raw(key)
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.backing.set_raw(key, value);
    }

    /// Read and deserialize. Absence and parse failure both yield `None`;
    /// a corrupt entry is indistinguishable from a missing one on purpose.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backing.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unparseable stored value");
                None
            }
        }
    }

    /// Serialize and write. Serialization failure is logged and dropped.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.backing.set_raw(key, &raw),
            Err(e) => tracing::warn!(key, error = %e, "failed to serialize value for storage"),
        }
    }

    pub fn remove(&self, key: &str) {
        self.backing.remove(key);
    }

    pub fn clear(&self) {
        self.backing.clear();
    }
}
