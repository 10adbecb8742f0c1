//! League leaderboard
//!
//! Keeps the top 10 finished rounds. Persisted to LocalStorage on the web
//! and to a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::round::RoundResult;

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// A single finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub score: u64,
    /// Board seed the round was played on
    pub seed: String,
    /// Unix timestamp (ms) when the round ended
    pub completed_at: u64,
}

/// Leaderboard, sorted by score descending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "loop_league_leaderboard";

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score earns a place
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a finished round. Returns the rank achieved, if any.
    pub fn record(&mut self, result: &RoundResult) -> Option<usize> {
        self.add(result.score, &result.seed, result.completed_at)
    }

    /// Insert a score (ties rank below earlier entries)
    pub fn add(&mut self, score: u64, seed: &str, completed_at: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = LeaderboardEntry {
            score,
            seed: seed.to_string(),
            completed_at,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Best entry on a given league seed
    pub fn best_for_seed(&self, seed: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.seed == seed)
    }

    /// Load the leaderboard from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(board) = serde_json::from_str::<Leaderboard>(&json) {
                    log::info!("Loaded {} leaderboard entries", board.entries.len());
                    return board;
                }
            }
        }

        log::info!("No leaderboard found, starting fresh");
        Self::new()
    }

    /// Save the leaderboard to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to save leaderboard");
                    return;
                }
                log::info!("Leaderboard saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Load from a JSON file; missing or malformed files start fresh
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let board = std::fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str::<Leaderboard>(&json).ok());
        match board {
            Some(board) => {
                log::info!("Loaded {} leaderboard entries from {}", board.entries.len(), path.display());
                board
            }
            None => {
                log::info!("No leaderboard at {}, starting fresh", path.display());
                Self::new()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string(self)?)?;
        log::info!("Leaderboard saved ({} entries)", self.entries.len());
        Ok(())
    }
}
