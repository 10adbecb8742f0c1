//! Browser bindings
//!
//! The page owns scheduling: it calls `tick()` every `timer_interval_ms()`
//! and renders whatever JSON snapshot comes back.

use wasm_bindgen::prelude::*;

use crate::leaderboard::Leaderboard;
use crate::platform::now_ms;
use crate::round::Round;
use crate::settings::Settings;
use crate::sim::RoundSnapshot;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Loop League starting...");
}

fn to_json(snapshot: &RoundSnapshot) -> String {
    serde_json::to_string(snapshot).unwrap_or_else(|e| {
        log::error!("Failed to encode snapshot: {}", e);
        String::from("{}")
    })
}

/// One round driven from JavaScript
#[wasm_bindgen]
pub struct WebRound {
    round: Round,
    settings: Settings,
    leaderboard: Leaderboard,
}

#[wasm_bindgen]
impl WebRound {
    /// New round on `seed`; an empty string picks a random seed
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &str) -> WebRound {
        let settings = Settings::load();
        let seed = if seed.is_empty() {
            crate::random_seed()
        } else {
            seed.to_string()
        };
        WebRound {
            round: Round::new(&seed, settings.round_config()),
            settings,
            leaderboard: Leaderboard::load(),
        }
    }

    pub fn seed(&self) -> String {
        self.round.state().seed.clone()
    }

    pub fn snapshot(&self) -> String {
        to_json(&self.round.snapshot())
    }

    pub fn start(&mut self) -> String {
        to_json(&self.round.start_round(now_ms()))
    }

    pub fn tap(&mut self, node_id: &str) -> String {
        to_json(&self.round.tap_node(node_id))
    }

    #[wasm_bindgen(js_name = clearPath)]
    pub fn clear_path(&mut self) -> String {
        to_json(&self.round.clear_path())
    }

    pub fn reset(&mut self, seed: &str) -> String {
        to_json(&self.round.reset_round(seed))
    }

    /// Timer tick; records the result in the leaderboard when the round ends
    pub fn tick(&mut self) -> String {
        if let Some(result) = self.round.poll(now_ms()) {
            if let Some(rank) = self.leaderboard.record(&result) {
                log::info!("New leaderboard rank #{} with {}", rank, result.score);
                self.leaderboard.save();
            }
        }
        to_json(&self.round.snapshot())
    }

    #[wasm_bindgen(js_name = timerIntervalMs)]
    pub fn timer_interval_ms(&self) -> u32 {
        self.settings.tick_interval_ms()
    }

    /// Selected theme as JSON
    pub fn theme(&self) -> String {
        serde_json::to_string(self.settings.theme()).unwrap_or_else(|_| String::from("{}"))
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, theme_id: &str) {
        self.settings.theme = theme_id.to_string();
        self.settings.save();
    }

    /// Leaderboard as JSON
    pub fn leaderboard(&self) -> String {
        serde_json::to_string(&self.leaderboard).unwrap_or_else(|_| String::from("{}"))
    }
}
