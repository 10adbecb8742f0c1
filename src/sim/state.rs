//! Round state and core engine types
//!
//! Everything the UI needs to render a round lives here; the state is owned
//! by the caller and only changed through the transition functions in
//! [`super::path`].

use serde::{Deserialize, Serialize};

use super::grid::{Grid, NodeId};
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    /// Board dealt, waiting for the player to start
    #[default]
    Waiting,
    /// Clock running, taps accepted
    Playing,
    /// Time ran out; state frozen until reset
    Finished,
}

/// Per-round engine parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Board edge length
    pub grid_size: usize,
    /// Round length in whole seconds
    pub duration_secs: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            duration_secs: ROUND_DURATION_SECS,
        }
    }
}

/// Complete round state (deterministic for a given seed and tap sequence)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Shareable seed the board and refills derive from
    pub seed: String,
    /// Current board
    pub grid: Grid,
    /// Open selection, oldest first
    pub path: Vec<NodeId>,
    /// Combo counter (>= 1)
    pub combo: u32,
    /// Score
    pub score: u64,
    /// Seconds left on the clock
    pub time_left: u32,
    /// Current phase
    pub status: RoundStatus,
    /// Every loop resolved this round, in order
    pub loops: Vec<Vec<NodeId>>,
}

impl RoundState {
    /// Fresh round in the waiting phase
    pub fn new(seed: &str, config: RoundConfig) -> Self {
        Self {
            seed: seed.to_string(),
            grid: Grid::generate(seed, config.grid_size),
            path: Vec::new(),
            combo: 1,
            score: 0,
            time_left: config.duration_secs,
            status: RoundStatus::Waiting,
            loops: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == RoundStatus::Playing
    }

    /// View handed to the UI layer
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            grid: self.grid.clone(),
            score: self.score,
            time_left: self.time_left,
            status: self.status,
            current_path: self.path.clone(),
            combo: self.combo,
        }
    }
}

/// Render-ready copy of the round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub time_left: u32,
    pub status: RoundStatus,
    pub current_path: Vec<NodeId>,
    pub combo: u32,
}
