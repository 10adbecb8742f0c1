//! Round countdown
//!
//! Remaining time is recomputed from the captured start time on every tick,
//! never decremented, so late or dropped ticks cannot make the clock drift.

use serde::{Deserialize, Serialize};

/// Identifies one started timer. Ticks carrying an older epoch are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerEpoch(pub u64);

/// A running countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimer {
    pub epoch: TimerEpoch,
    /// Wall-clock start (ms)
    pub started_at_ms: u64,
    pub duration_secs: u32,
}

impl RoundTimer {
    pub fn new(epoch: TimerEpoch, started_at_ms: u64, duration_secs: u32) -> Self {
        Self {
            epoch,
            started_at_ms,
            duration_secs,
        }
    }

    /// Whole seconds elapsed (clock going backwards counts as zero)
    pub fn elapsed_secs(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms) / 1000
    }

    /// Whole seconds left, never below zero
    pub fn remaining_secs(&self, now_ms: u64) -> u32 {
        let elapsed = self.elapsed_secs(now_ms);
        u64::from(self.duration_secs).saturating_sub(elapsed) as u32
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.remaining_secs(now_ms) == 0
    }

    /// Fraction of the round used, 0.0 - 1.0 (for progress bars)
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_secs == 0 {
            return 1.0;
        }
        let left = self.remaining_secs(now_ms) as f32;
        1.0 - left / self.duration_secs as f32
    }
}
