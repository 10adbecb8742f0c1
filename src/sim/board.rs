//! Board mutation after a loop resolves: remove, drop, refill
//!
//! Each step is a pure transformation. Removal and gravity work on a
//! [`PartialGrid`] whose cells may be empty; refill is the only way back to
//! a complete [`Grid`], and it always fills every hole.

use super::grid::{Grid, Node, NodeColor, NodeId};
use super::rng::SeededRng;

/// Board with holes, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialGrid {
    size: usize,
    cells: Vec<Option<Node>>,
}

impl PartialGrid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        if id.x >= self.size || id.y >= self.size {
            return None;
        }
        self.cells[id.y * self.size + id.x].as_ref()
    }

    /// Number of occupied coordinates
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Coordinates with no node, column by column
    pub fn holes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for x in 0..self.size {
            for y in 0..self.size {
                if self.cells[y * self.size + x].is_none() {
                    out.push(NodeId::new(x, y));
                }
            }
        }
        out
    }
}

/// Take the loop's nodes off the board.
///
/// Survivors keep coordinates and colors; their `connections` lose any entry
/// naming a removed node.
pub fn remove_nodes(grid: &Grid, removed: &[NodeId]) -> PartialGrid {
    let cells = grid
        .nodes()
        .iter()
        .map(|node| {
            if removed.contains(&node.id) {
                return None;
            }
            let mut node = node.clone();
            node.connections.retain(|c| !removed.contains(c));
            Some(node)
        })
        .collect();
    PartialGrid {
        size: grid.size(),
        cells,
    }
}

/// Gravity: in every column survivors fall to the bottom rows (highest `y`)
/// keeping their relative order. Ids follow the new coordinates.
pub fn drop_nodes(mut board: PartialGrid) -> PartialGrid {
    let size = board.size;
    for x in 0..size {
        let column: Vec<Node> = (0..size)
            .filter_map(|y| board.cells[y * size + x].take())
            .collect();
        let top = size - column.len();
        for (offset, node) in column.into_iter().enumerate() {
            let y = top + offset;
            board.cells[y * size + x] = Some(node.relocated(NodeId::new(x, y)));
        }
    }
    board
}

/// Fill every hole with a fresh node drawn from `seed` shifted by `offset`.
///
/// Holes are visited column by column, top to bottom.
pub fn refill(board: PartialGrid, seed: &str, offset: u64) -> Grid {
    let mut rng = SeededRng::new(seed, offset);
    let PartialGrid { size, mut cells } = board;
    for x in 0..size {
        for y in 0..size {
            let slot = y * size + x;
            if cells[slot].is_none() {
                cells[slot] = Some(Node::new(NodeId::new(x, y), NodeColor::draw(&mut rng)));
            }
        }
    }
    let nodes = cells.into_iter().flatten().collect();
    Grid::from_row_major(size, nodes)
}

/// Remove, drop and refill in one step
pub fn resolve_loop(grid: &Grid, loop_ids: &[NodeId], seed: &str, offset: u64) -> Grid {
    let removed = remove_nodes(grid, loop_ids);
    let dropped = drop_nodes(removed);
    refill(dropped, seed, offset)
}
