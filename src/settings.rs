//! Game settings and preferences
//!
//! Persisted as JSON next to the high score.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::platform::KeyValueStore;
use crate::tuning::Tuning;

/// Allowed range for the touch drag multiplier
const TOUCH_SENSITIVITY_RANGE: (f32, f32) = (0.25, 4.0);

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Decorative snowfall behind the sprites
    pub snowfall: bool,
    /// Multiplier applied to touch drag deltas
    pub touch_sensitivity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snowfall: true,
            touch_sensitivity: 1.0,
        }
    }
}

impl Settings {
    /// Touch sensitivity clamped to the supported range
    pub fn effective_touch_sensitivity(&self) -> f32 {
        let (lo, hi) = TOUCH_SENSITIVITY_RANGE;
        if self.touch_sensitivity.is_finite() {
            self.touch_sensitivity.clamp(lo, hi)
        } else {
            1.0
        }
    }

    /// Fold preferences into the simulation tuning
    pub fn apply(&self, tuning: &mut Tuning) {
        if !self.snowfall {
            tuning.snow_chance = 0.0;
        }
    }

    /// Load settings, falling back to defaults on missing or corrupt data
    pub fn load(store: &impl KeyValueStore) -> Self {
        if let Some(json) = store.get(SETTINGS_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings from storage");
                return settings;
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            if store.set(SETTINGS_KEY, &json) {
                log::info!("Settings saved");
            } else {
                log::warn!("Settings could not be saved");
            }
        }
    }
}
