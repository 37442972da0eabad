//! Incremental graph builder.

use std::collections::HashMap;

use mn_core::{EdgeId, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, Graph};
use crate::key::NodeKey;
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Nodes and edges keep their insertion order; that order is the
/// "generator order" every downstream consumer iterates in.
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    nodes: Vec<NodeKey>,
    lookup: HashMap<NodeKey, NodeId>,
    edges: Vec<(NodeId, NodeId)>,
    seed: Option<u64>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-populated with the given nodes.
    pub fn with_nodes(keys: impl IntoIterator<Item = NodeKey>) -> Self {
        let mut builder = Self::new();
        for key in keys {
            builder.add_node(key);
        }
        builder
    }

    /// Add a node and return its ID. Adding a key twice returns the
    /// existing ID.
    pub fn add_node(&mut self, key: NodeKey) -> NodeId {
        if let Some(id) = self.lookup.get(&key) {
            return *id;
        }
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(key);
        self.lookup.insert(key, id);
        id
    }

    /// Add an edge between two already-added nodes.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push((a, b));
        id
    }

    /// Add an edge between two nodes addressed by key.
    pub fn connect(&mut self, a: NodeKey, b: NodeKey) -> GraphResult<EdgeId> {
        let a_id = self.id_of(&a)?;
        let b_id = self.id_of(&b)?;
        Ok(self.add_edge(a_id, b_id))
    }

    /// Record the seed that drove generation.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn id_of(&self, key: &NodeKey) -> GraphResult<NodeId> {
        self.lookup
            .get(key)
            .copied()
            .ok_or(GraphError::UnknownNode { node: *key })
    }

    /// Validate and freeze into an immutable `Graph`.
    pub fn build(self) -> GraphResult<Graph> {
        validate::validate_edges(&self.nodes, &self.edges)?;

        let edges: Vec<Edge> = self
            .edges
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| Edge {
                id: EdgeId::from_index(i as u32),
                a,
                b,
            })
            .collect();

        let (node_edge_offsets, node_edges) = Self::build_adjacency(self.nodes.len(), &edges);

        Ok(Graph {
            nodes: self.nodes,
            lookup: self.lookup,
            edges,
            node_edge_offsets,
            node_edges,
            seed: self.seed,
        })
    }

    /// Build compact adjacency lists: for each node, its incident edges in
    /// edge order.
    fn build_adjacency(node_count: usize, edges: &[Edge]) -> (Vec<usize>, Vec<EdgeId>) {
        let mut per_node: Vec<Vec<EdgeId>> = vec![Vec::new(); node_count];
        for edge in edges {
            per_node[edge.a.index() as usize].push(edge.id);
            per_node[edge.b.index() as usize].push(edge.id);
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut flat = Vec::with_capacity(edges.len() * 2);
        offsets.push(0);
        for list in per_node {
            flat.extend(list);
            offsets.push(flat.len());
        }
        (offsets, flat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node(NodeKey::Index(4));
        let again = builder.add_node(NodeKey::Index(4));
        assert_eq!(a, again);
        assert_eq!(builder.node_count(), 1);
    }

    #[test]
    fn connect_unknown_node_fails() {
        let mut builder = GraphBuilder::with_nodes([NodeKey::Index(0)]);
        let err = builder
            .connect(NodeKey::Index(0), NodeKey::Index(9))
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownNode {
                node: NodeKey::Index(9)
            }
        );
    }

    #[test]
    fn build_keeps_edge_order() {
        let mut builder = GraphBuilder::with_nodes((0..3).map(NodeKey::Index));
        builder.connect(NodeKey::Index(2), NodeKey::Index(0)).unwrap();
        builder.connect(NodeKey::Index(0), NodeKey::Index(1)).unwrap();
        let graph = builder.build().unwrap();

        let keys: Vec<_> = graph.edge_keys().collect();
        assert_eq!(
            keys,
            vec![
                (NodeKey::Index(2), NodeKey::Index(0)),
                (NodeKey::Index(0), NodeKey::Index(1)),
            ]
        );
        assert_eq!(graph.node_edges(graph.node_id(&NodeKey::Index(0)).unwrap()).len(), 2);
    }

    #[test]
    fn self_loop_rejected() {
        let mut builder = GraphBuilder::with_nodes([NodeKey::Index(0)]);
        builder.connect(NodeKey::Index(0), NodeKey::Index(0)).unwrap();
        assert!(matches!(
            builder.build(),
            Err(GraphError::SelfLoop { .. })
        ));
    }

    #[test]
    fn duplicate_edge_rejected_in_either_orientation() {
        let mut builder = GraphBuilder::with_nodes((0..2).map(NodeKey::Index));
        builder.connect(NodeKey::Index(0), NodeKey::Index(1)).unwrap();
        builder.connect(NodeKey::Index(1), NodeKey::Index(0)).unwrap();
        assert!(matches!(
            builder.build(),
            Err(GraphError::DuplicateEdge { .. })
        ));
    }
}
