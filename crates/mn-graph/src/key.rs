//! Topology-level node identifiers.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier of a node as the generator names it.
///
/// Grids address nodes by `(row, col)`; random and small-world graphs use
/// plain integers. In request files an integer maps to `Index` and a
/// two-element list maps to `Grid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKey {
    Index(u32),
    Grid(u32, u32),
}

impl NodeKey {
    pub fn grid(row: u32, col: u32) -> Self {
        NodeKey::Grid(row, col)
    }

    pub fn is_grid(&self) -> bool {
        matches!(self, NodeKey::Grid(..))
    }
}

impl From<u32> for NodeKey {
    fn from(index: u32) -> Self {
        NodeKey::Index(index)
    }
}

impl From<(u32, u32)> for NodeKey {
    fn from((row, col): (u32, u32)) -> Self {
        NodeKey::Grid(row, col)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Index(i) => write!(f, "{i}"),
            NodeKey::Grid(r, c) => write!(f, "({r}, {c})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_addressing() {
        assert_eq!(NodeKey::Index(7).to_string(), "7");
        assert_eq!(NodeKey::grid(1, 2).to_string(), "(1, 2)");
    }

    #[test]
    fn grid_keys_order_row_major() {
        assert!(NodeKey::grid(0, 5) < NodeKey::grid(1, 0));
        assert!(NodeKey::grid(1, 0) < NodeKey::grid(1, 1));
    }
}
