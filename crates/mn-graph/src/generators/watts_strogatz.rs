use std::collections::HashSet;

use rand::Rng;

use crate::builder::GraphBuilder;
use crate::error::GraphResult;
use crate::key::NodeKey;

/// Watts–Strogatz small-world graph.
///
/// Builds a ring where each node links to `degree / 2` successors (so odd
/// degrees round down), then visits the ring edges in construction order and
/// with probability `rewire_probability` moves the far endpoint of each to a
/// uniformly chosen node that is neither the near endpoint nor already its
/// neighbour. A rewired edge keeps its slot in the edge sequence. Nodes that
/// are already adjacent to everyone are skipped.
///
/// `degree == node_count` short-circuits to the complete graph.
pub fn watts_strogatz<R: Rng + ?Sized>(
    degree: u32,
    node_count: u32,
    rewire_probability: f64,
    rng: &mut R,
) -> GraphResult<GraphBuilder> {
    let mut builder = GraphBuilder::with_nodes((0..node_count).map(NodeKey::Index));

    if degree == node_count {
        for a in 0..node_count {
            for b in a + 1..node_count {
                builder.connect(NodeKey::Index(a), NodeKey::Index(b))?;
            }
        }
        return Ok(builder);
    }

    let n = node_count as usize;
    let half = degree / 2;
    let mut edges: Vec<(u32, u32)> = Vec::with_capacity(n * half as usize);
    let mut present: HashSet<(u32, u32)> = HashSet::with_capacity(n * half as usize);
    let mut degrees = vec![0_usize; n];

    for j in 1..=half {
        for u in 0..node_count {
            let v = (u + j) % node_count;
            edges.push((u, v));
            present.insert(unordered(u, v));
            degrees[u as usize] += 1;
            degrees[v as usize] += 1;
        }
    }

    let mut rewired = 0_usize;
    for slot in 0..edges.len() {
        if rng.random::<f64>() >= rewire_probability {
            continue;
        }
        let (u, v) = edges[slot];
        if degrees[u as usize] >= n - 1 {
            continue;
        }
        let w = loop {
            let candidate = rng.random_range(0..node_count);
            if candidate != u && !present.contains(&unordered(u, candidate)) {
                break candidate;
            }
        };
        present.remove(&unordered(u, v));
        present.insert(unordered(u, w));
        degrees[v as usize] -= 1;
        degrees[w as usize] += 1;
        edges[slot] = (u, w);
        rewired += 1;
    }
    tracing::debug!(rewired, total = edges.len(), "small-world rewiring done");

    for (a, b) in edges {
        builder.connect(NodeKey::Index(a), NodeKey::Index(b))?;
    }
    Ok(builder)
}

fn unordered(a: u32, b: u32) -> (u32, u32) {
    if a <= b { (a, b) } else { (b, a) }
}
