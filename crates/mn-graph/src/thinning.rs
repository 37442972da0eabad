//! Bernoulli edge removal.

use mn_core::ensure_probability;
use rand::Rng;

use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::graph::Graph;

/// Drop each edge independently with probability `removal_probability`.
///
/// Edges are visited once, in graph order; survivors keep their relative
/// order. Nodes are never removed, so the result may be disconnected.
/// A probability of zero returns the graph unchanged without drawing from
/// `rng`.
pub fn thin_edges<R: Rng + ?Sized>(
    graph: &Graph,
    removal_probability: f64,
    rng: &mut R,
) -> GraphResult<Graph> {
    ensure_probability(removal_probability, "removal_probability")?;
    if removal_probability == 0.0 {
        return Ok(graph.clone());
    }

    let mut builder = GraphBuilder::with_nodes(graph.nodes().iter().copied());
    builder.set_seed(graph.seed());

    let mut removed = 0_usize;
    for edge in graph.edges() {
        if rng.random::<f64>() < removal_probability {
            removed += 1;
            continue;
        }
        builder.add_edge(edge.a, edge.b);
    }

    tracing::debug!(
        removed,
        kept = graph.edge_count() - removed,
        removal_probability,
        "edge thinning applied"
    );
    builder.build()
}
