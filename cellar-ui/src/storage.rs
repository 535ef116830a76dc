//! Browser `localStorage` and the dark-mode body class.

use crate::config::DARK_MODE_CLASS;
use anyhow::anyhow;
use cellar_core::preference::{KeyValueStorage, PreferenceStore};

/// `window.localStorage`, looked up on every access.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> anyhow::Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
        window
            .local_storage()
            .map_err(|e| anyhow!("localStorage unavailable: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage unavailable"))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| anyhow!("localStorage get {} failed: {:?}", key, e))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("localStorage set {} failed: {:?}", key, e))
    }
}

pub fn preferences() -> PreferenceStore<LocalStorage> {
    PreferenceStore::new(LocalStorage)
}

/// Add or remove the dark-mode class on `<body>`.
pub fn apply_theme(dark: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    match body {
        Some(body) => {
            if let Err(e) = body.class_list().toggle_with_force(DARK_MODE_CLASS, dark) {
                log::warn!("[Cellar] storage: Failed to apply theme: {:?}", e);
            }
        }
        None => log::warn!("[Cellar] storage: No <body> to apply theme to"),
    }
}

/// Apply the saved preference. Call before the app renders.
pub fn apply_saved_theme() -> bool {
    let dark = preferences().is_dark_mode();
    apply_theme(dark);
    dark
}

/// Flip the displayed mode, save and apply it, and return the new value.
pub fn toggle_theme(current: bool) -> bool {
    let dark = preferences().toggle(current);
    apply_theme(dark);
    dark
}
