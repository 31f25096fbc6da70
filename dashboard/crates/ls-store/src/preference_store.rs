use crate::error::Result as StoreResult;
use crate::keys;
use crate::local_store::LocalStore;

use ls_core::{PreferenceChange, Preferences, Theme};

use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Typed access to the dashboard's persisted preferences.
///
/// Writes are synchronous and durable when they return. Malformed persisted
/// values are logged and treated as absent; they never surface as errors.
#[derive(Debug)]
pub struct PreferenceStore {
    store: LocalStore,
}

impl PreferenceStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(LocalStore::in_memory())
    }

    /// JSON-decoded value under `key`; `None` when absent or malformed.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get_item(key)?;
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed value under '{key}': {e}");
                None
            }
        }
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Plain string value (theme, role and token are stored unencoded).
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.store.get_item(key)
    }

    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set_item(key, json)
    }

    pub fn set_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.store.set_item(key, value)
    }

    pub fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.store.remove_item(key)
    }

    /// Effective preferences.
    ///
    /// Defaults, then each well-typed field of `appSettings`, then the
    /// dedicated theme key (falling back to the legacy one).
    pub fn get_all(&self) -> Preferences {
        let mut prefs = Preferences::default();

        if let Some(settings) = self.get::<Value>(keys::APP_SETTINGS) {
            prefs.merge_json(&settings);
        }

        if let Some(theme) = self.stored_theme() {
            prefs.theme = theme;
        }

        prefs
    }

    /// Apply one toggle and persist the result. Returns the new preferences.
    pub fn update(&mut self, change: PreferenceChange) -> StoreResult<Preferences> {
        let mut prefs = self.get_all();
        prefs.apply(&change);
        debug!("Preference changed: {change:?}");
        self.save_all(&prefs)?;
        Ok(prefs)
    }

    /// Persist every preference (the settings panel's explicit save).
    pub fn save_all(&mut self, prefs: &Preferences) -> StoreResult<()> {
        let settings = serde_json::to_string(prefs)?;
        let theme = prefs.theme.as_str();
        self.store.set_items([
            (keys::APP_SETTINGS, settings),
            (keys::THEME, theme.to_string()),
            (keys::LEGACY_THEME, theme.to_string()),
        ])
    }

    pub fn local_store(&self) -> &LocalStore {
        &self.store
    }

    pub(crate) fn local_store_mut(&mut self) -> &mut LocalStore {
        &mut self.store
    }

    fn stored_theme(&self) -> Option<Theme> {
        [keys::THEME, keys::LEGACY_THEME]
            .into_iter()
            .filter_map(|key| self.store.get_item(key).map(|raw| (key, raw)))
            .find_map(|(key, raw)| match Theme::from_str(raw.trim()) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!("Discarding stored theme under '{key}': {e}");
                    None
                }
            })
    }
}
