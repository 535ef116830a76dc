//! Persisted dark-mode preference.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key of the dark-mode flag.
pub const DARK_MODE_KEY: &str = "wine-cellar.dark-mode";

/// A string key-value store such as the browser's `localStorage`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-process storage, used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and flips the dark-mode flag. Only the literal `"true"` means dark.
pub struct PreferenceStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn is_dark_mode(&self) -> bool {
        match self.storage.get(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                log::warn!("[Cellar] preference: Failed to read dark mode: {}", e);
                false
            }
        }
    }

    pub fn set_dark_mode(&self, dark: bool) {
        if let Err(e) = self.storage.set(DARK_MODE_KEY, if dark { "true" } else { "false" }) {
            log::warn!("[Cellar] preference: Failed to persist dark mode: {}", e);
        }
    }

    /// Flip the displayed mode, persist it and return the new value.
    ///
    /// The caller passes the mode it is showing, so toggling still alternates
    /// when storage cannot be read back.
    pub fn toggle(&self, current: bool) -> bool {
        let dark = !current;
        self.set_dark_mode(dark);
        dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct Unavailable;

    impl KeyValueStorage for Unavailable {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            bail!("storage disabled")
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            bail!("storage disabled")
        }
    }

    #[test]
    fn defaults_to_light() {
        let prefs = PreferenceStore::new(MemoryStorage::default());
        assert!(!prefs.is_dark_mode());
    }

    #[test]
    fn toggle_persists_string_flag() {
        let prefs = PreferenceStore::new(MemoryStorage::default());
        assert!(prefs.toggle(prefs.is_dark_mode()));
        assert_eq!(
            prefs.storage.get(DARK_MODE_KEY).unwrap().as_deref(),
            Some("true")
        );
        assert!(prefs.is_dark_mode());
    }

    #[test]
    fn double_toggle_round_trips() {
        let storage = MemoryStorage::default();
        storage.set(DARK_MODE_KEY, "false").unwrap();
        let prefs = PreferenceStore::new(storage);

        prefs.toggle(prefs.is_dark_mode());
        prefs.toggle(prefs.is_dark_mode());
        assert_eq!(
            prefs.storage.get(DARK_MODE_KEY).unwrap().as_deref(),
            Some("false")
        );
        assert!(!prefs.is_dark_mode());
    }

    #[test]
    fn unrecognized_values_read_as_light() {
        let storage = MemoryStorage::default();
        storage.set(DARK_MODE_KEY, "yes").unwrap();
        assert!(!PreferenceStore::new(storage).is_dark_mode());
    }

    #[test]
    fn storage_failure_reads_as_light() {
        let prefs = PreferenceStore::new(Unavailable);
        assert!(!prefs.is_dark_mode());
    }

    #[test]
    fn toggle_alternates_without_storage() {
        let prefs = PreferenceStore::new(Unavailable);
        let mut dark = prefs.is_dark_mode();

        dark = prefs.toggle(dark);
        assert!(dark);
        dark = prefs.toggle(dark);
        assert!(!dark);
        dark = prefs.toggle(dark);
        assert!(dark);
    }
}
