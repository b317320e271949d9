use std::sync::{Arc, Mutex};

use crate::preferences::{PreferenceStore, Preferences};
use crate::StoreError;

/// In-memory PreferenceStore for testing and as a fallback when nothing
/// persistent is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    preferences: Arc<Mutex<Option<Preferences>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Preferences, StoreError> {
        let guard = self.preferences.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, preferences: &Preferences) -> Result<(), StoreError> {
        let mut guard = self.preferences.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(preferences.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Theme;

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), Preferences::default());
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        store.save(&Preferences::with_theme(Theme::Dark)).unwrap();
        assert_eq!(store.load().unwrap().theme, Some(Theme::Dark));
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save(&Preferences::with_theme(Theme::Light)).unwrap();
        assert_eq!(other.load_or_default().theme, Some(Theme::Light));
    }
}
