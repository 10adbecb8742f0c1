//! Loop League - a seeded loop-drawing puzzle
//!
//! Core modules:
//! - `sim`: Deterministic engine (grid generation, paths, loops, scoring, refill)
//! - `round`: Round controller owning the state and the active timer
//! - `timer`: Wall-clock countdown recomputed from a captured start time
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Persisted preferences
//! - `theme`: Color palettes for rendering
//! - `leaderboard`: League scores

pub mod leaderboard;
pub mod platform;
pub mod round;
pub mod settings;
pub mod sim;
pub mod theme;
pub mod timer;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use leaderboard::Leaderboard;
pub use round::{Round, RoundResult};
pub use settings::Settings;
pub use theme::Theme;

use rand::Rng;
use rand::distr::Alphanumeric;

/// Game configuration constants
pub mod consts {
    /// Default board edge length (nodes per row and column)
    pub const GRID_SIZE: usize = 6;
    /// Smallest board that can still hold a loop
    pub const MIN_GRID_SIZE: usize = 2;
    /// Largest board the settings accept
    pub const MAX_GRID_SIZE: usize = 12;

    /// Round length in seconds
    pub const ROUND_DURATION_SECS: u32 = 60;
    /// Cadence at which the UI should tick the round timer
    pub const TIMER_INTERVAL_MS: u64 = 100;

    /// Shortest path slice that counts as a loop
    pub const MIN_LOOP_LEN: usize = 3;
    /// Points per node in a resolved loop
    pub const POINTS_PER_NODE: u64 = 10;

    /// Linear congruential generator parameters
    pub const LCG_MULTIPLIER: u64 = 9301;
    pub const LCG_INCREMENT: u64 = 49297;
    pub const LCG_MODULUS: u64 = 233_280;

    /// Length of generated quick-play seeds
    pub const RANDOM_SEED_LEN: usize = 8;
}

/// Fresh alphanumeric seed for a quick-play round
pub fn random_seed() -> String {
    random_seed_with(&mut rand::rng())
}

/// Alphanumeric seed drawn from the given RNG
pub fn random_seed_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(consts::RANDOM_SEED_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_seed_shape() {
        let seed = random_seed();
        assert_eq!(seed.len(), consts::RANDOM_SEED_LEN);
        assert!(seed.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_seed_with_is_reproducible() {
        let a = random_seed_with(&mut Pcg32::seed_from_u64(7));
        let b = random_seed_with(&mut Pcg32::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
