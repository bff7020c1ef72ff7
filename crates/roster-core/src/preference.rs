//! Preference Storage
//!
//! Small key/value interface over the browser's local storage, so the sort
//! preference can be faked in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// In-memory store. Clones share the same entries, which lets a test stand
/// in for two page loads over one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The persisted sort-control value under one fixed key
#[derive(Debug, Clone)]
pub struct SortPreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> SortPreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn save(&self, value: &str) -> Result<(), String> {
        self.store.set(&self.key, value)
    }

    /// Previously saved value. An empty string counts as nothing saved.
    pub fn restore(&self) -> Option<String> {
        self.store.get(&self.key).filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_after_reload() {
        let browser = MemoryStore::new();

        let first_load = SortPreference::new(browser.clone(), "sortOrder");
        assert_eq!(first_load.restore(), None);
        first_load.save("crocette_due-asc").unwrap();

        let second_load = SortPreference::new(browser, "sortOrder");
        assert_eq!(second_load.restore().as_deref(), Some("crocette_due-asc"));
    }

    #[test]
    fn test_last_save_wins() {
        let pref = SortPreference::new(MemoryStore::new(), "sortOrder");
        pref.save("name-asc").unwrap();
        pref.save("last-desc").unwrap();
        assert_eq!(pref.restore().as_deref(), Some("last-desc"));
    }

    #[test]
    fn test_empty_value_is_not_restored() {
        let pref = SortPreference::new(MemoryStore::new(), "sortOrder");
        pref.save("").unwrap();
        assert_eq!(pref.restore(), None);
    }

    #[test]
    fn test_external_clear() {
        let browser = MemoryStore::new();
        let pref = SortPreference::new(browser.clone(), "sortOrder");
        pref.save("name-desc").unwrap();
        browser.remove("sortOrder");
        assert_eq!(pref.restore(), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let browser = MemoryStore::new();
        SortPreference::new(browser.clone(), "a").save("name-asc").unwrap();
        assert_eq!(SortPreference::new(browser, "b").restore(), None);
    }
}
