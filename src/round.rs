//! Round controller
//!
//! Owns one [`RoundState`] and at most one running [`RoundTimer`]. Every UI
//! action returns a fresh snapshot. Starting issues a new timer epoch and
//! resetting cancels the running one, so a stale scheduled tick can never
//! finish the next round.

use serde::{Deserialize, Serialize};

use crate::sim::{self, NodeId, RoundConfig, RoundSnapshot, RoundState, RoundStatus, TapOutcome};
use crate::timer::{RoundTimer, TimerEpoch};

/// Final result handed to the leaderboard when the clock runs out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub seed: String,
    pub score: u64,
    /// Wall-clock finish time (ms)
    pub completed_at: u64,
    /// Loops resolved during the round
    pub loops: usize,
}

/// A round plus the timer bookkeeping around it
#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
    config: RoundConfig,
    timer: Option<RoundTimer>,
    last_epoch: u64,
}

impl Round {
    /// Deal a board for `seed` and wait for the player to start
    pub fn new(seed: &str, config: RoundConfig) -> Self {
        log::info!("New round with seed {:?} ({}x{})", seed, config.grid_size, config.grid_size);
        Self {
            state: RoundState::new(seed, config),
            config,
            timer: None,
            last_epoch: 0,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    pub fn status(&self) -> RoundStatus {
        self.state.status
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.state.snapshot()
    }

    /// Epoch of the running timer, if any
    pub fn timer_epoch(&self) -> Option<TimerEpoch> {
        self.timer.map(|t| t.epoch)
    }

    pub fn timer(&self) -> Option<&RoundTimer> {
        self.timer.as_ref()
    }

    /// Begin play and arm the countdown at `now_ms`
    pub fn start_round(&mut self, now_ms: u64) -> RoundSnapshot {
        if sim::start(&mut self.state) {
            self.last_epoch += 1;
            let epoch = TimerEpoch(self.last_epoch);
            self.timer = Some(RoundTimer::new(epoch, now_ms, self.config.duration_secs));
            log::info!("Round started (seed {:?}, timer epoch {})", self.state.seed, epoch.0);
        }
        self.snapshot()
    }

    /// Tap by node key (`"x-y"`); malformed keys are ignored
    pub fn tap_node(&mut self, key: &str) -> RoundSnapshot {
        match key.parse::<NodeId>() {
            Ok(id) => {
                self.apply_tap(id);
            }
            Err(e) => log::trace!("Ignoring tap: {}", e),
        }
        self.snapshot()
    }

    /// Tap by id, reporting what happened
    pub fn apply_tap(&mut self, id: NodeId) -> TapOutcome {
        let outcome = sim::tap(&mut self.state, id);
        log::trace!("Tap {} -> {:?}", id, outcome);
        outcome
    }

    pub fn clear_path(&mut self) -> RoundSnapshot {
        sim::clear_path(&mut self.state);
        self.snapshot()
    }

    /// Cancel any running timer and deal a new board for `seed`
    pub fn reset_round(&mut self, seed: &str) -> RoundSnapshot {
        if let Some(timer) = self.timer.take() {
            log::info!("Cancelled timer epoch {}", timer.epoch.0);
        }
        self.state = RoundState::new(seed, self.config);
        log::info!("Round reset with seed {:?}", seed);
        self.snapshot()
    }

    /// Timer tick from the scheduler.
    ///
    /// Ticks for a cancelled or replaced timer are ignored. Returns the round
    /// result exactly once, on the tick that finds the clock at zero.
    pub fn tick(&mut self, epoch: TimerEpoch, now_ms: u64) -> Option<RoundResult> {
        let timer = self.timer.filter(|t| t.epoch == epoch)?;

        self.state.time_left = timer.remaining_secs(now_ms);
        if !timer.is_expired(now_ms) {
            return None;
        }

        self.timer = None;
        if !sim::expire(&mut self.state) {
            return None;
        }
        log::info!(
            "Round finished: score {} from {} loops (seed {:?})",
            self.state.score,
            self.state.loops.len(),
            self.state.seed
        );
        Some(RoundResult {
            seed: self.state.seed.clone(),
            score: self.state.score,
            completed_at: now_ms,
            loops: self.state.loops.len(),
        })
    }

    /// Tick the current timer, if one is running
    pub fn poll(&mut self, now_ms: u64) -> Option<RoundResult> {
        let epoch = self.timer_epoch()?;
        self.tick(epoch, now_ms)
    }
}
