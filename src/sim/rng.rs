//! Seeded random stream
//!
//! A tiny linear congruential generator keyed by a text seed. Boards are
//! shared between league players as seed strings, so the stream must be
//! identical on every platform.

use crate::consts::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER};

/// Reduce a seed string to its integer form (sum of UTF-16 code units).
///
/// An empty seed maps to 0 and still yields a playable stream.
pub fn seed_value(seed: &str) -> u64 {
    seed.encode_utf16().map(u64::from).sum()
}

/// Deterministic stream of floats in `[0, 1)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Stream for `seed` shifted by `offset`
    pub fn new(seed: &str, offset: u64) -> Self {
        Self::from_value(seed_value(seed).wrapping_add(offset))
    }

    /// Stream starting from an already reduced seed value
    pub fn from_value(value: u64) -> Self {
        // (s * a + c) mod m only depends on s mod m
        Self {
            state: value % LCG_MODULUS,
        }
    }

    /// Advance and return the next draw
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }

    /// Next draw mapped onto `0..len` by flooring
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_value_sums_code_units() {
        assert_eq!(seed_value(""), 0);
        assert_eq!(seed_value("a"), 97);
        assert_eq!(seed_value("abc"), 97 + 98 + 99);
        // Astral characters count as two UTF-16 units
        assert_eq!(seed_value("😀"), 0xD83D + 0xDE00);
    }

    #[test]
    fn test_first_draw_matches_lcg() {
        let mut rng = SeededRng::new("abc", 0);
        let expected = (294 * 9301 + 49297) % 233_280;
        assert_eq!(rng.next_f64(), expected as f64 / 233_280.0);
    }

    #[test]
    fn test_offset_shifts_stream() {
        let a: Vec<f64> = SeededRng::new("abc", 5).take(8).collect();
        let b: Vec<f64> = SeededRng::from_value(294 + 5).take(8).collect();
        assert_eq!(a, b);
        let c: Vec<f64> = SeededRng::new("abc", 0).take(8).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_draws_in_unit_interval() {
        for v in SeededRng::new("league-7", 12345).take(1000) {
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_large_offset_does_not_overflow() {
        let mut rng = SeededRng::new("x", u64::MAX - 10);
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn test_next_index_bounds() {
        let mut rng = SeededRng::new("bounds", 0);
        for _ in 0..500 {
            assert!(rng.next_index(5) < 5);
        }
    }
}
