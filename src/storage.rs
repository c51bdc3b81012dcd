//! Persistent Key-Value Storage
//!
//! Browser `localStorage` behind a small trait so the session and theme
//! can be restored in tests without a browser.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("[STORAGE] Failed to write key {}", key);
                }
            }
            None => log::warn!("[STORAGE] localStorage unavailable, {} not saved", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// `localStorage` when the browser exposes it, otherwise a session-only map
pub fn browser_or_memory() -> Arc<dyn KeyValueStore> {
    if LocalStorage::storage().is_some() {
        Arc::new(LocalStorage)
    } else {
        log::warn!("[STORAGE] localStorage unavailable, falling back to memory");
        Arc::new(MemoryStorage::new())
    }
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_shared_between_clones() {
        let storage = MemoryStorage::new();
        let reopened = storage.clone();

        storage.set("authToken", "abc");
        assert_eq!(reopened.get("authToken").as_deref(), Some("abc"));

        reopened.remove("authToken");
        assert!(storage.get("authToken").is_none());
    }
}
