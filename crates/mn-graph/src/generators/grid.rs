use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::key::NodeKey;

/// `rows` x `cols` lattice.
///
/// Nodes are added row-major. Edges are emitted per node in the same order:
/// first the edge to the node below, then the edge to the node on the right.
pub fn grid_2d(rows: u32, cols: u32) -> GraphResult<GraphBuilder> {
    let mut builder = GraphBuilder::new();
    for r in 0..rows {
        for c in 0..cols {
            builder.add_node(NodeKey::grid(r, c));
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                builder.connect(NodeKey::grid(r, c), NodeKey::grid(r + 1, c))?;
            }
            if c + 1 < cols {
                builder.connect(NodeKey::grid(r, c), NodeKey::grid(r, c + 1))?;
            }
        }
    }

    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_order() {
        let graph = grid_2d(2, 2).unwrap().build().unwrap();
        let keys: Vec<_> = graph.edge_keys().collect();
        assert_eq!(
            keys,
            vec![
                (NodeKey::grid(0, 0), NodeKey::grid(1, 0)),
                (NodeKey::grid(0, 0), NodeKey::grid(0, 1)),
                (NodeKey::grid(0, 1), NodeKey::grid(1, 1)),
                (NodeKey::grid(1, 0), NodeKey::grid(1, 1)),
            ]
        );
    }

    #[test]
    fn single_row_is_a_path() {
        let graph = grid_2d(1, 4).unwrap().build().unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_connected());
    }
}
