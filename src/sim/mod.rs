//! Deterministic game engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (boards and refills derive from the seed text)
//! - Stable iteration order (row-major boards, column-major refills)
//! - No clock, rendering or platform dependencies

pub mod board;
pub mod grid;
pub mod path;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod state;

pub use board::{PartialGrid, drop_nodes, refill, remove_nodes, resolve_loop};
pub use grid::{Grid, InvalidGridError, Node, NodeColor, NodeId, ParseNodeIdError};
pub use path::{TapOutcome, clear_path, expire, start, tap};
pub use rng::{SeededRng, seed_value};
pub use rules::{are_connectable, ids_connectable};
pub use scoring::score_loop;
pub use state::{RoundConfig, RoundSnapshot, RoundState, RoundStatus};
