//! Local Storage
//!
//! `PreferenceStore` backed by `window.localStorage`.

use roster_core::PreferenceStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_storage().ok_or_else(|| "localStorage is not available".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("setItem({}) failed: {:?}", key, e))
    }
}
