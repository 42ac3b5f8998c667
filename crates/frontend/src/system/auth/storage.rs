//! Key-value backends for the session
use std::collections::HashMap;
use std::sync::Mutex;
use web_sys::window;

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The browser's `sessionStorage`: cleared when the tab closes
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_session_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_session_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("sessionStorage rejected key '{}'", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_session_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process storage, used by tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}
