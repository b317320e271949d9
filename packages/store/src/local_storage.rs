//! # Browser local storage, web-side persistence
//!
//! [`LocalStorageStore`] is the [`PreferenceStore`] used on the **web platform**.
//! The theme lives under the `"theme"` key as `"dark"` or `"light"`; a missing
//! key means the user never picked one and the system setting applies.
//!
//! `localStorage` can be missing (private browsing, disabled storage). That
//! surfaces as [`StoreError::Storage`]; callers normally go through
//! [`PreferenceStore::load_or_default`] so the page still renders.

use web_sys::Storage;

use crate::preferences::{PreferenceStore, Preferences, Theme};
use crate::StoreError;

const THEME_KEY: &str = "theme";

/// `window.localStorage`-backed PreferenceStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Storage("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Storage(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Storage("localStorage disabled".into()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Preferences, StoreError> {
        let raw = Self::storage()?
            .get_item(THEME_KEY)
            .map_err(|e| StoreError::Storage(format!("{e:?}")))?;
        let theme = raw.map(|value| value.parse::<Theme>()).transpose()?;
        Ok(Preferences { theme })
    }

    fn save(&self, preferences: &Preferences) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let result = match preferences.theme {
            Some(theme) => storage.set_item(THEME_KEY, theme.as_str()),
            None => storage.remove_item(THEME_KEY),
        };
        result.map_err(|e| StoreError::Storage(format!("{e:?}")))
    }
}
