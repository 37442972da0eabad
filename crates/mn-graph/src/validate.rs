//! Graph validation logic.

use std::collections::HashSet;

use mn_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::key::NodeKey;

/// Check that every edge references an existing node, joins two distinct
/// nodes, and appears only once regardless of orientation.
pub(crate) fn validate_edges(nodes: &[NodeKey], edges: &[(NodeId, NodeId)]) -> GraphResult<()> {
    let mut seen = HashSet::with_capacity(edges.len());

    for &(a, b) in edges {
        let key_a = key_of(nodes, a)?;
        let key_b = key_of(nodes, b)?;

        if a == b {
            return Err(GraphError::SelfLoop { node: key_a });
        }

        let unordered = if a < b { (a, b) } else { (b, a) };
        if !seen.insert(unordered) {
            return Err(GraphError::DuplicateEdge { a: key_a, b: key_b });
        }
    }

    Ok(())
}

fn key_of(nodes: &[NodeKey], id: NodeId) -> GraphResult<NodeKey> {
    nodes
        .get(id.index() as usize)
        .copied()
        .ok_or_else(|| GraphError::invalid(format!("edge references missing node id {id}")))
}
