//! Host preferences
//!
//! Persisted as JSON next to the best score. Gameplay constants are not
//! settings; these only shape how the host presents the game.

use serde::{Deserialize, Serialize};

use crate::platform::storage::PersistentStore;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Silence all cues
    pub muted: bool,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Fixed RNG seed; random per session when absent
    pub seed: Option<u64>,
    /// Pause when the window loses focus
    pub pause_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            sfx_volume: 1.0,
            seed: None,
            pause_on_blur: true,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "skyflap_settings";

    /// Volume actually applied to cues
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.sfx_volume.clamp(0.0, 1.0)
        }
    }

    /// Load from the store, falling back to defaults
    pub fn load(store: &dyn PersistentStore) -> Self {
        let Some(json) = store.get_raw(Self::STORAGE_KEY) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn PersistentStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set_raw(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
