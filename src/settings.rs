//! Player settings and preferences
//!
//! Persisted as JSON in LocalStorage, separately from leaderboard data.

use serde::{Deserialize, Serialize};

use crate::platform;
use crate::tuning::Variant;

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Game variant (classic jump-only or free roam)
    pub variant: Variant,
    /// Name used for run submission; empty until the player enters one
    pub player_name: String,

    // === Debug ===
    /// Outline hitboxes
    pub show_hitboxes: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Classic,
            player_name: String::new(),
            show_hitboxes: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "dog_dash_settings";

    /// Remember the submitting player's name (trimmed). Empty names are ignored.
    pub fn remember_player_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.player_name = name.to_string();
        true
    }

    /// Load settings, falling back to defaults on missing or corrupt data
    pub fn load() -> Self {
        if let Some(json) = platform::storage_get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(json) => {
                platform::storage_set(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
            Err(e) => log::warn!("Settings not saved: {}", e),
        }
    }
}
