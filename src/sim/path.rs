//! Path and loop engine
//!
//! Round transitions driven by player input. Invalid input never errors:
//! it is either ignored or restarts the selection.

use super::board::resolve_loop;
use super::grid::NodeId;
use super::rules::ids_connectable;
use super::scoring::score_loop;
use super::state::{RoundState, RoundStatus};
use crate::consts::MIN_LOOP_LEN;

/// What a tap did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// No state change
    Ignored,
    /// Empty path began at the tapped node
    Started,
    /// Tapped node appended to the path
    Extended,
    /// Disconnected tap discarded the path and began a new one
    Restarted,
    /// Loop closed, scored and cleared from the board
    LoopClosed { len: usize, points: u64 },
}

/// `waiting -> playing`; any other phase is left alone
pub fn start(state: &mut RoundState) -> bool {
    if state.status != RoundStatus::Waiting {
        return false;
    }
    state.status = RoundStatus::Playing;
    true
}

/// Clock reached zero: `playing -> finished`
pub fn expire(state: &mut RoundState) -> bool {
    if state.status != RoundStatus::Playing {
        return false;
    }
    state.time_left = 0;
    state.status = RoundStatus::Finished;
    true
}

/// Drop the open selection and reset the combo
pub fn clear_path(state: &mut RoundState) {
    if state.status == RoundStatus::Finished {
        return;
    }
    state.path.clear();
    state.combo = 1;
}

/// Apply one tap, in precedence order:
/// ignored unless playing; ignored on the path's last node; a node earlier in
/// the path tries to close a loop; an empty path starts; a connectable node
/// extends; anything else restarts the selection.
pub fn tap(state: &mut RoundState, id: NodeId) -> TapOutcome {
    if !state.is_playing() || !state.grid.contains(&id) {
        return TapOutcome::Ignored;
    }

    let Some(&last) = state.path.last() else {
        state.path.push(id);
        state.combo = 1;
        return TapOutcome::Started;
    };
    if last == id {
        return TapOutcome::Ignored;
    }

    if let Some(pos) = state.path.iter().position(|p| *p == id) {
        return close_loop(state, pos);
    }

    if ids_connectable(&state.grid, &last, &id) {
        state.path.push(id);
        TapOutcome::Extended
    } else {
        state.path.clear();
        state.path.push(id);
        state.combo = 1;
        TapOutcome::Restarted
    }
}

/// Resolve `path[pos..]` as a loop closed by tapping `path[pos]` again
fn close_loop(state: &mut RoundState, pos: usize) -> TapOutcome {
    if state.path.len() - pos < MIN_LOOP_LEN {
        return TapOutcome::Ignored;
    }

    let loop_ids = state.path.split_off(pos);
    let len = loop_ids.len();
    let points = score_loop(len, state.combo);

    // Refill offset is the score before this loop counts
    state.grid = resolve_loop(&state.grid, &loop_ids, &state.seed, state.score);
    state.score += points;
    state.path.clear();
    state.combo += 1;
    log::debug!(
        "Loop of {} closed for {} points (score {}, combo now {})",
        len,
        points,
        state.score,
        state.combo
    );
    state.loops.push(loop_ids);

    TapOutcome::LoopClosed { len, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::{Grid, NodeColor};
    use crate::sim::state::RoundConfig;
    use NodeColor::*;

    /// 6x6 board with a red 2x2 square in the top-left corner and a checker of
    /// blue/green elsewhere so no other red links exist.
    fn square_board() -> Grid {
        let mut colors = Vec::with_capacity(36);
        for y in 0..6 {
            for x in 0..6 {
                let c = if x < 2 && y < 2 {
                    Red
                } else if (x + y) % 2 == 0 {
                    Blue
                } else {
                    Green
                };
                colors.push(c);
            }
        }
        Grid::from_colors(6, &colors).unwrap()
    }

    fn playing_round() -> RoundState {
        let mut state = RoundState::new("abc", RoundConfig::default());
        state.grid = square_board();
        assert!(start(&mut state));
        state
    }

    fn id(x: usize, y: usize) -> NodeId {
        NodeId::new(x, y)
    }

    #[test]
    fn test_tap_ignored_while_waiting() {
        let mut state = RoundState::new("abc", RoundConfig::default());
        let before = state.clone();
        assert_eq!(tap(&mut state, id(0, 0)), TapOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_start_only_from_waiting() {
        let mut state = playing_round();
        assert!(!start(&mut state));
        assert!(expire(&mut state));
        assert!(!start(&mut state));
        assert_eq!(state.status, RoundStatus::Finished);
    }

    #[test]
    fn test_first_tap_starts_path() {
        let mut state = playing_round();
        state.combo = 3;
        assert_eq!(tap(&mut state, id(0, 0)), TapOutcome::Started);
        assert_eq!(state.path, vec![id(0, 0)]);
        assert_eq!(state.combo, 1);
    }

    #[test]
    fn test_double_tap_is_noop() {
        let mut state = playing_round();
        tap(&mut state, id(0, 0));
        let before = state.clone();
        assert_eq!(tap(&mut state, id(0, 0)), TapOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_connectable_tap_extends() {
        let mut state = playing_round();
        tap(&mut state, id(0, 0));
        assert_eq!(tap(&mut state, id(1, 0)), TapOutcome::Extended);
        assert_eq!(state.path, vec![id(0, 0), id(1, 0)]);
    }

    #[test]
    fn test_different_color_restarts_path() {
        let mut state = playing_round();
        tap(&mut state, id(0, 0));
        tap(&mut state, id(1, 0));
        state.combo = 2;
        // (2, 0) is blue and adjacent to the red (1, 0)
        assert_eq!(tap(&mut state, id(2, 0)), TapOutcome::Restarted);
        assert_eq!(state.path, vec![id(2, 0)]);
        assert_eq!(state.combo, 1);
    }

    #[test]
    fn test_non_adjacent_same_color_restarts_path() {
        let mut state = playing_round();
        tap(&mut state, id(2, 0)); // blue
        assert_eq!(tap(&mut state, id(4, 0)), TapOutcome::Restarted); // blue, two away
        assert_eq!(state.path, vec![id(4, 0)]);
    }

    #[test]
    fn test_short_loop_attempt_ignored() {
        let mut state = playing_round();
        tap(&mut state, id(0, 0));
        tap(&mut state, id(1, 0));
        let before = state.clone();
        assert_eq!(tap(&mut state, id(0, 0)), TapOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_square_loop_scores_and_refills() {
        let mut state = playing_round();
        for p in [id(0, 0), id(1, 0), id(1, 1), id(0, 1)] {
            tap(&mut state, p);
        }
        assert_eq!(state.path.len(), 4);

        let outcome = tap(&mut state, id(0, 0));
        assert_eq!(outcome, TapOutcome::LoopClosed { len: 4, points: 40 });
        assert_eq!(state.score, 40);
        assert_eq!(state.combo, 2);
        assert!(state.path.is_empty());
        assert!(state.grid.is_complete());
        assert_eq!(state.loops, vec![vec![id(0, 0), id(1, 0), id(1, 1), id(0, 1)]]);
        // Survivors already rest at the bottom; only the top two rows were refilled
        assert_eq!(state.grid.get(&id(0, 2)).map(|n| n.color), Some(Blue));
        assert_eq!(state.grid.get(&id(2, 0)).map(|n| n.color), Some(Blue));
    }

    #[test]
    fn test_loop_refill_uses_score_before_loop() {
        let mut state = playing_round();
        state.score = 120;
        let grid_before = state.grid.clone();
        let loop_ids = vec![id(0, 0), id(1, 0), id(1, 1), id(0, 1)];
        for p in &loop_ids {
            tap(&mut state, *p);
        }
        tap(&mut state, id(0, 0));
        assert_eq!(state.grid, resolve_loop(&grid_before, &loop_ids, "abc", 120));
        assert_eq!(state.score, 160);
    }

    #[test]
    fn test_loop_closure_from_middle_keeps_only_the_cycle() {
        // Red column of three above the square: (0,0)..(0,2) plus (1,1),(1,2)
        let mut colors = vec![Blue; 36];
        for (x, y) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 2)] {
            colors[y * 6 + x] = Red;
        }
        let mut state = RoundState::new("abc", RoundConfig::default());
        state.grid = Grid::from_colors(6, &colors).unwrap();
        start(&mut state);

        for p in [id(0, 0), id(0, 1), id(1, 1), id(1, 2), id(0, 2)] {
            tap(&mut state, p);
        }
        let outcome = tap(&mut state, id(0, 1));
        assert_eq!(outcome, TapOutcome::LoopClosed { len: 4, points: 40 });
        assert_eq!(state.loops[0], vec![id(0, 1), id(1, 1), id(1, 2), id(0, 2)]);
        assert!(state.path.is_empty());
    }

    #[test]
    fn test_closure_needs_only_length() {
        // Red U shape: (0,0) (0,1) (1,1) (2,1) (2,0); (1,0) is blue
        let mut colors = vec![Blue; 36];
        for (x, y) in [(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)] {
            colors[y * 6 + x] = Red;
        }
        let mut state = RoundState::new("abc", RoundConfig::default());
        state.grid = Grid::from_colors(6, &colors).unwrap();
        start(&mut state);

        for p in [id(0, 0), id(0, 1), id(1, 1), id(2, 1), id(2, 0)] {
            tap(&mut state, p);
        }
        // (2,0) is not adjacent to (0,0), the loop still counts
        assert_eq!(tap(&mut state, id(0, 0)), TapOutcome::LoopClosed { len: 5, points: 50 });
        assert_eq!(state.score, 50);
        assert!(state.path.is_empty());
        assert!(state.grid.is_complete());
    }

    #[test]
    fn test_three_node_corner_closes() {
        let mut colors = vec![Blue; 36];
        for (x, y) in [(0, 0), (1, 0), (1, 1)] {
            colors[y * 6 + x] = Red;
        }
        let mut state = RoundState::new("abc", RoundConfig::default());
        state.grid = Grid::from_colors(6, &colors).unwrap();
        start(&mut state);

        for p in [id(0, 0), id(1, 0), id(1, 1)] {
            tap(&mut state, p);
        }
        assert_eq!(tap(&mut state, id(0, 0)), TapOutcome::LoopClosed { len: 3, points: 30 });
        assert_eq!(state.loops, vec![vec![id(0, 0), id(1, 0), id(1, 1)]]);
        assert_eq!(state.score, 30);
    }

    #[test]
    fn test_combo_grows_until_path_restarts() {
        let mut state = playing_round();
        state.combo = 2;
        for p in [id(0, 0), id(1, 0), id(1, 1), id(0, 1)] {
            tap(&mut state, p);
        }
        // Starting the path from empty reset the combo first
        assert_eq!(state.combo, 1);
        tap(&mut state, id(0, 0));
        assert_eq!(state.combo, 2);
    }

    #[test]
    fn test_clear_path_resets_combo() {
        let mut state = playing_round();
        tap(&mut state, id(0, 0));
        state.combo = 4;
        clear_path(&mut state);
        assert!(state.path.is_empty());
        assert_eq!(state.combo, 1);
    }

    #[test]
    fn test_finished_round_is_frozen() {
        let mut state = playing_round();
        tap(&mut state, id(0, 0));
        expire(&mut state);
        let before = state.clone();
        assert_eq!(tap(&mut state, id(1, 0)), TapOutcome::Ignored);
        clear_path(&mut state);
        assert_eq!(state, before);
        assert_eq!(state.time_left, 0);
    }

    #[test]
    fn test_off_board_tap_ignored() {
        let mut state = playing_round();
        tap(&mut state, id(0, 0));
        let before = state.clone();
        assert_eq!(tap(&mut state, id(9, 9)), TapOutcome::Ignored);
        assert_eq!(state, before);
    }
}
