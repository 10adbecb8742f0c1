//! Board types and seeded generation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::SeededRng;

/// Node colors (the abstract palette; themes map these to visuals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl NodeColor {
    /// Palette in draw order
    pub const ALL: [Self; 5] = [Self::Red, Self::Blue, Self::Green, Self::Yellow, Self::Purple];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeColor::Red => "red",
            NodeColor::Blue => "blue",
            NodeColor::Green => "green",
            NodeColor::Yellow => "yellow",
            NodeColor::Purple => "purple",
        }
    }

    /// Single-letter tag for text rendering
    pub fn letter(&self) -> char {
        match self {
            NodeColor::Red => 'R',
            NodeColor::Blue => 'B',
            NodeColor::Green => 'G',
            NodeColor::Yellow => 'Y',
            NodeColor::Purple => 'P',
        }
    }

    /// Color for a single RNG draw
    pub fn draw(rng: &mut SeededRng) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }
}

/// Node identity: its grid coordinates, written `"x-y"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NodeId {
    pub x: usize,
    pub y: usize,
}

impl NodeId {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True if `other` is one of the four orthogonal neighbours
    pub fn is_orthogonal_neighbor(&self, other: &NodeId) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    /// Orthogonal neighbours that lie on a `size × size` board
    pub fn neighbors(&self, size: usize) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(4);
        if self.x > 0 {
            out.push(NodeId::new(self.x - 1, self.y));
        }
        if self.x + 1 < size {
            out.push(NodeId::new(self.x + 1, self.y));
        }
        if self.y > 0 {
            out.push(NodeId::new(self.x, self.y - 1));
        }
        if self.y + 1 < size {
            out.push(NodeId::new(self.x, self.y + 1));
        }
        out
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

/// Rejected node key text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid node id {0:?} (expected \"x-y\")")]
pub struct ParseNodeIdError(String);

/// Deserialized board that does not hold one node per slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {size}x{size} grid: {nodes} nodes, or nodes out of place")]
pub struct InvalidGridError {
    pub size: usize,
    pub nodes: usize,
}

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNodeIdError(s.to_string());
        let (x, y) = s.trim().split_once('-').ok_or_else(err)?;
        let x = x.parse().map_err(|_| err())?;
        let y = y.parse().map_err(|_| err())?;
        Ok(NodeId::new(x, y))
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> String {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = ParseNodeIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A colored node on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub color: NodeColor,
    /// Display marker carried for UI compatibility; loop logic ignores it
    #[serde(default)]
    pub connected: bool,
    /// Legacy link list; kept consistent on removal, otherwise unused
    #[serde(default)]
    pub connections: Vec<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, color: NodeColor) -> Self {
        Self {
            id,
            color,
            connected: false,
            connections: Vec::new(),
        }
    }

    /// Same node moved to `id`
    pub fn relocated(self, id: NodeId) -> Self {
        Self { id, ..self }
    }
}

/// Complete `size × size` board, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    nodes: Vec<Node>,
}

/// Wire form of [`Grid`], checked before it becomes one
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    nodes: Vec<Node>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = InvalidGridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let grid = Grid {
            size: raw.size,
            nodes: raw.nodes,
        };
        if !grid.is_complete() {
            return Err(InvalidGridError {
                size: grid.size,
                nodes: grid.nodes.len(),
            });
        }
        Ok(grid)
    }
}

impl Grid {
    /// Seeded board. Cells are drawn row by row, left to right.
    pub fn generate(seed: &str, size: usize) -> Self {
        let mut rng = SeededRng::new(seed, 0);
        let mut nodes = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                nodes.push(Node::new(NodeId::new(x, y), NodeColor::draw(&mut rng)));
            }
        }
        Self { size, nodes }
    }

    /// Board from explicit row-major colors; `None` unless exactly `size * size` are given
    pub fn from_colors(size: usize, colors: &[NodeColor]) -> Option<Self> {
        if colors.len() != size * size {
            return None;
        }
        let nodes = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| Node::new(NodeId::new(i % size, i / size), color))
            .collect();
        Some(Self { size, nodes })
    }

    /// Build from row-major nodes whose ids already match their slots
    pub(crate) fn from_row_major(size: usize, nodes: Vec<Node>) -> Self {
        let grid = Self { size, nodes };
        debug_assert!(grid.is_complete(), "grid missing or misplaced nodes");
        grid
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Nodes in row-major order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        id.x < self.size && id.y < self.size
    }

    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        if !self.contains(id) {
            return None;
        }
        self.nodes.get(id.y * self.size + id.x)
    }

    /// Colors of one row, left to right
    pub fn row_colors(&self, y: usize) -> Vec<NodeColor> {
        self.nodes
            .iter()
            .filter(|n| n.id.y == y)
            .map(|n| n.color)
            .collect()
    }

    /// Every coordinate holds exactly one node, and each node sits in its slot
    pub fn is_complete(&self) -> bool {
        self.nodes.len() == self.size * self.size
            && self
                .nodes
                .iter()
                .enumerate()
                .all(|(i, n)| n.id == NodeId::new(i % self.size, i / self.size))
    }
}
