//! Connection rule shared by path extension and loop closure

use super::grid::{Grid, Node, NodeId};

/// Two nodes may be linked when they are orthogonal neighbours of the same color
pub fn are_connectable(a: &Node, b: &Node) -> bool {
    a.id.is_orthogonal_neighbor(&b.id) && a.color == b.color
}

/// Id-based form of [`are_connectable`]; ids off the board never connect
pub fn ids_connectable(grid: &Grid, a: &NodeId, b: &NodeId) -> bool {
    match (grid.get(a), grid.get(b)) {
        (Some(a), Some(b)) => are_connectable(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::NodeColor;

    fn node(x: usize, y: usize, color: NodeColor) -> Node {
        Node::new(NodeId::new(x, y), color)
    }

    #[test]
    fn test_orthogonal_same_color_connects() {
        let a = node(1, 1, NodeColor::Red);
        for (x, y) in [(0, 1), (2, 1), (1, 0), (1, 2)] {
            assert!(are_connectable(&a, &node(x, y, NodeColor::Red)));
        }
    }

    #[test]
    fn test_diagonal_rejected() {
        let a = node(1, 1, NodeColor::Red);
        assert!(!are_connectable(&a, &node(2, 2, NodeColor::Red)));
        assert!(!are_connectable(&a, &node(0, 0, NodeColor::Red)));
    }

    #[test]
    fn test_color_mismatch_rejected() {
        let a = node(1, 1, NodeColor::Red);
        assert!(!are_connectable(&a, &node(1, 2, NodeColor::Blue)));
    }

    #[test]
    fn test_self_pair_rejected() {
        let a = node(1, 1, NodeColor::Green);
        assert!(!are_connectable(&a, &a.clone()));
    }

    #[test]
    fn test_distance_two_rejected() {
        let a = node(0, 0, NodeColor::Red);
        assert!(!are_connectable(&a, &node(2, 0, NodeColor::Red)));
    }

    #[test]
    fn test_symmetric_over_board() {
        let grid = Grid::generate("symmetry", 6);
        for a in grid.nodes() {
            for b in grid.nodes() {
                assert_eq!(are_connectable(a, b), are_connectable(b, a));
            }
        }
    }

    #[test]
    fn test_ids_off_board_never_connect() {
        let grid = Grid::generate("abc", 6);
        assert!(!ids_connectable(&grid, &NodeId::new(5, 0), &NodeId::new(6, 0)));
    }
}
