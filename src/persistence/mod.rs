//! Progress and settings save/load
//!
//! Each record is one JSON blob under a fixed key. Reads fall back to defaults
//! on a missing or corrupt entry; writes are fire-and-forget and only logged
//! when they fail.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::consts::{PROGRESS_KEY, SETTINGS_KEY};
use crate::game::Progress;
use crate::platform::KeyValueStore;
use crate::settings::Settings;

/// Typed save/load over a key-value store
pub struct SaveStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SaveStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn load_progress(&self) -> Progress {
        let progress: Progress = self.load(PROGRESS_KEY).unwrap_or_default();
        log::info!(
            "Progress: {} completed, {} unlocked",
            progress.completed_count(),
            progress.unlocked()
        );
        progress
    }

    pub fn save_progress(&mut self, progress: &Progress) {
        if self.save(PROGRESS_KEY, progress) {
            log::info!("Progress saved ({} completed)", progress.completed_count());
        }
    }

    pub fn load_settings(&self) -> Settings {
        self.load(SETTINGS_KEY).unwrap_or_else(|| {
            log::info!("Using default settings");
            Settings::default()
        })
    }

    pub fn save_settings(&mut self, settings: &Settings) {
        if self.save(SETTINGS_KEY, settings) {
            log::info!("Settings saved");
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = match self.store.get(key) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Reading {} failed: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring corrupt {}: {}", key, e);
                None
            }
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Serializing {} failed: {}", key, e);
                return false;
            }
        };
        match self.store.set(key, &json) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Writing {} failed: {}", key, e);
                false
            }
        }
    }
}
