//! Loop scoring

use crate::consts::POINTS_PER_NODE;

/// Points for a loop of `loop_len` nodes at `combo` (the value before this loop counts).
///
/// `floor(len * 10 * (1 + (combo - 1) * 0.5))`, computed in integers as
/// `base * (combo + 1) / 2`. Combo values below 1 are treated as 1.
pub fn score_loop(loop_len: usize, combo: u32) -> u64 {
    let base = loop_len as u64 * POINTS_PER_NODE;
    let combo = u64::from(combo.max(1));
    base.saturating_mul(combo + 1) / 2
}
