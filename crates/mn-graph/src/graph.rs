//! Core graph data structures.

use std::collections::HashMap;

use mn_core::{EdgeId, NodeId};
use petgraph::graph::UnGraph;

use crate::key::NodeKey;

/// An undirected edge between two distinct nodes.
///
/// `a` is the endpoint the generator named first; the orientation carries
/// no electrical meaning but keeps device emission reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub a: NodeId,
    pub b: NodeId,
}

/// A validated, immutable network: nodes, edges in generator order, and
/// compact node->edge adjacency.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<NodeKey>,
    pub(crate) lookup: HashMap<NodeKey, NodeId>,
    pub(crate) edges: Vec<Edge>,

    /// Offsets for node->edge adjacency: node i's edges are in node_edges[node_edge_offsets[i]..node_edge_offsets[i+1]].
    pub(crate) node_edge_offsets: Vec<usize>,
    pub(crate) node_edges: Vec<EdgeId>,

    /// Seed that drove the random parts of construction, if any.
    pub(crate) seed: Option<u64>,
}

impl Graph {
    /// All node keys, in generator order.
    pub fn nodes(&self) -> &[NodeKey] {
        &self.nodes
    }

    /// All edges, in generator order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.lookup.contains_key(key)
    }

    pub fn node_id(&self, key: &NodeKey) -> Option<NodeId> {
        self.lookup.get(key).copied()
    }

    pub fn node_key(&self, id: NodeId) -> Option<NodeKey> {
        self.nodes.get(id.index() as usize).copied()
    }

    /// Endpoint keys of every edge, in generator order.
    pub fn edge_keys(&self) -> impl Iterator<Item = (NodeKey, NodeKey)> + '_ {
        self.edges.iter().map(|edge| {
            (
                self.nodes[edge.a.index() as usize],
                self.nodes[edge.b.index() as usize],
            )
        })
    }

    /// Edge IDs incident to a node.
    pub fn node_edges(&self, id: NodeId) -> &[EdgeId] {
        let idx = id.index() as usize;
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.node_edge_offsets[idx];
        let end = self.node_edge_offsets[idx + 1];
        &self.node_edges[start..end]
    }

    pub fn degree(&self, key: &NodeKey) -> Option<usize> {
        self.node_id(key).map(|id| self.node_edges(id).len())
    }

    /// Degree of every node, in node order.
    pub fn degrees(&self) -> Vec<usize> {
        self.node_edge_offsets.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn has_edge(&self, a: &NodeKey, b: &NodeKey) -> bool {
        let (Some(a), Some(b)) = (self.node_id(a), self.node_id(b)) else {
            return false;
        };
        self.node_edges(a).iter().any(|edge_id| {
            let edge = &self.edges[edge_id.index() as usize];
            (edge.a == a && edge.b == b) || (edge.a == b && edge.b == a)
        })
    }

    /// Copy into a petgraph graph; node weights are the keys and node
    /// indices match `NodeId` indices.
    pub fn to_petgraph(&self) -> UnGraph<NodeKey, ()> {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<_> = self.nodes.iter().map(|key| graph.add_node(*key)).collect();
        for edge in &self.edges {
            graph.add_edge(
                indices[edge.a.index() as usize],
                indices[edge.b.index() as usize],
                (),
            );
        }
        graph
    }

    /// Number of connected components (isolated nodes count as one each).
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.to_petgraph())
    }

    /// True when every node is reachable from every other. An empty graph is
    /// trivially connected.
    pub fn is_connected(&self) -> bool {
        self.nodes.is_empty() || self.component_count() == 1
    }
}
