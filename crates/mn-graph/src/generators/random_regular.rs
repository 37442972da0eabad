use std::collections::{BTreeMap, BTreeSet};
use std::iter;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::builder::GraphBuilder;
use crate::error::{GraphError, GraphResult};
use crate::key::NodeKey;

/// Restarts allowed before pairing is declared hopeless.
pub const MAX_PAIRING_ATTEMPTS: usize = 1_000;

/// Random `degree`-regular graph on `node_count` nodes.
///
/// Stubs (one per half-edge) are shuffled and paired; pairs that would form
/// a self-loop or a parallel edge go back into the pool for another round.
/// When the leftover pool cannot be completed the whole attempt restarts.
/// Edges come out in ascending `(low, high)` order, so a fixed RNG state
/// always yields the same edge sequence.
///
/// The caller validates `degree < node_count` and `degree * node_count` even.
pub fn random_regular<R: Rng + ?Sized>(
    degree: u32,
    node_count: u32,
    rng: &mut R,
) -> GraphResult<GraphBuilder> {
    let mut builder = GraphBuilder::with_nodes((0..node_count).map(NodeKey::Index));
    if degree == 0 {
        return Ok(builder);
    }

    for attempt in 0..MAX_PAIRING_ATTEMPTS {
        if let Some(edges) = try_pairing(degree, node_count, rng) {
            tracing::debug!(attempt, edges = edges.len(), "random regular pairing succeeded");
            for (a, b) in edges {
                builder.connect(NodeKey::Index(a), NodeKey::Index(b))?;
            }
            return Ok(builder);
        }
    }

    Err(GraphError::GenerationFailed {
        attempts: MAX_PAIRING_ATTEMPTS,
    })
}

fn try_pairing<R: Rng + ?Sized>(
    degree: u32,
    node_count: u32,
    rng: &mut R,
) -> Option<BTreeSet<(u32, u32)>> {
    let mut edges = BTreeSet::new();
    let mut stubs: Vec<u32> = (0..node_count)
        .flat_map(|v| iter::repeat_n(v, degree as usize))
        .collect();

    while !stubs.is_empty() {
        let mut leftovers: BTreeMap<u32, usize> = BTreeMap::new();
        stubs.shuffle(rng);

        for pair in stubs.chunks_exact(2) {
            let (a, b) = if pair[0] <= pair[1] {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };
            if a != b && !edges.contains(&(a, b)) {
                edges.insert((a, b));
            } else {
                *leftovers.entry(a).or_default() += 1;
                *leftovers.entry(b).or_default() += 1;
            }
        }

        if !has_open_pair(&edges, &leftovers) {
            return None;
        }

        stubs = leftovers
            .into_iter()
            .flat_map(|(v, count)| iter::repeat_n(v, count))
            .collect();
    }

    Some(edges)
}

/// True when the leftover stubs still contain two distinct nodes that are
/// not yet adjacent (or when nothing is left over).
fn has_open_pair(edges: &BTreeSet<(u32, u32)>, leftovers: &BTreeMap<u32, usize>) -> bool {
    if leftovers.is_empty() {
        return true;
    }
    let nodes: Vec<u32> = leftovers.keys().copied().collect();
    nodes.iter().enumerate().any(|(i, &a)| {
        nodes[i + 1..]
            .iter()
            .any(|&b| !edges.contains(&(a, b)))
    })
}
