//! Player settings and preferences
//!
//! Persisted in LocalStorage on the web and as a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::RoundConfig;
use crate::theme::{DEFAULT_THEME_ID, Theme};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board edge length
    pub grid_size: usize,
    /// Round length in seconds
    pub round_duration_secs: u32,
    /// How often the UI should tick the round timer (ms)
    pub timer_interval_ms: u64,
    /// Selected theme id
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            round_duration_secs: ROUND_DURATION_SECS,
            timer_interval_ms: TIMER_INTERVAL_MS,
            theme: DEFAULT_THEME_ID.to_string(),
        }
    }
}

impl Settings {
    /// Clamp values into playable ranges
    pub fn sanitized(mut self) -> Self {
        self.grid_size = self.grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.round_duration_secs = self.round_duration_secs.max(1);
        self.timer_interval_ms = self.timer_interval_ms.max(1);
        self
    }

    /// Engine parameters for a new round
    pub fn round_config(&self) -> RoundConfig {
        let s = self.clone().sanitized();
        RoundConfig {
            grid_size: s.grid_size,
            duration_secs: s.round_duration_secs,
        }
    }

    /// Tick cadence for the page timer, saturating at `u32::MAX`
    pub fn tick_interval_ms(&self) -> u32 {
        u32::try_from(self.timer_interval_ms.max(1)).unwrap_or(u32::MAX)
    }

    /// Selected theme (falls back to the default theme)
    pub fn theme(&self) -> &'static Theme {
        Theme::by_id(&self.theme)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "loop_league_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings.sanitized();
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to save settings");
                    return;
                }
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed settings in {}: {}", path.display(), e),
            },
            Err(e) => log::info!("No settings at {} ({}), using defaults", path.display(), e),
        }
        Self::default()
    }

    /// Write settings as pretty JSON
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
