//! Durable key-value preferences.
//!
//! `BrowserStorage` is backed by `localStorage`; when the page has no window
//! or storage is blocked, reads return `None` and writes are dropped.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::window;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage` of the current page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write for {}", key);
            }
        }
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Load a JSON value stored under `key`. Missing or malformed values give `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl PreferenceStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed preference {}: {}", key, e);
            None
        }
    }
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(store: &impl PreferenceStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => log::error!("failed to serialize preference {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::default();
        let view = store.clone();
        store.set("darkMode", "true");
        assert_eq!(view.get("darkMode").as_deref(), Some("true"));
        assert_eq!(view.get("missing"), None);
    }

    #[test]
    fn test_json_helpers() {
        let store = MemoryStore::default();
        save_json(&store, "ids", &vec![3, 1]);
        assert_eq!(store.get("ids").as_deref(), Some("[3,1]"));
        assert_eq!(load_json::<Vec<i64>>(&store, "ids"), Some(vec![3, 1]));
    }

    #[test]
    fn test_load_json_malformed_is_none() {
        let store = MemoryStore::with_entry("ids", "[1, 2");
        assert_eq!(load_json::<Vec<i64>>(&store, "ids"), None);
        assert_eq!(load_json::<Vec<i64>>(&store, "absent"), None);
    }
}
