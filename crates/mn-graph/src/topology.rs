//! Topology construction entry point.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use mn_core::ensure_probability;

use crate::error::GraphResult;
use crate::generators;
use crate::graph::Graph;
use crate::spec::NetworkSpec;
use crate::thinning::thin_edges;

/// Builds a `Graph` from a `NetworkSpec`, optionally thinning edges.
///
/// One RNG stream drives both generation and thinning. It is seeded from the
/// network's seed when present and from OS entropy otherwise; the seed actually
/// used is recorded on the graph so any run can be replayed.
#[derive(Debug, Clone)]
pub struct TopologyBuilder {
    spec: NetworkSpec,
    removal_probability: f64,
    seed: Option<u64>,
}

impl TopologyBuilder {
    pub fn new(spec: NetworkSpec) -> Self {
        let seed = spec.seed();
        Self {
            spec,
            removal_probability: 0.0,
            seed,
        }
    }

    /// Probability of removing each edge after generation (default 0).
    pub fn removal_probability(mut self, probability: f64) -> Self {
        self.removal_probability = probability;
        self
    }

    /// Override the RNG seed; needed to make thinning of a grid repeatable.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn build(&self) -> GraphResult<Graph> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut graph = self.build_with_rng(&mut rng)?;
        graph.seed = Some(seed);

        tracing::info!(
            kind = %self.spec.kind(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            seed,
            "network topology built"
        );
        Ok(graph)
    }

    /// Build using a caller-supplied RNG. The resulting graph records no seed.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphResult<Graph> {
        self.spec.validate()?;
        ensure_probability(self.removal_probability, "removal_probability")?;

        let builder = match self.spec {
            NetworkSpec::SingleDevice => generators::single_device()?,
            NetworkSpec::Grid2D { rows, cols } => generators::grid_2d(rows, cols)?,
            NetworkSpec::RandomRegular {
                degree, node_count, ..
            } => generators::random_regular(degree, node_count, rng)?,
            NetworkSpec::WattsStrogatz {
                degree,
                node_count,
                rewire_probability,
                ..
            } => generators::watts_strogatz(degree, node_count, rewire_probability, rng)?,
        };
        let graph = builder.build()?;

        if self.removal_probability > 0.0 {
            let thinned = thin_edges(&graph, self.removal_probability, rng)?;
            if !thinned.is_connected() {
                tracing::warn!(
                    components = thinned.component_count(),
                    "edge removal left the network disconnected"
                );
            }
            return Ok(thinned);
        }
        Ok(graph)
    }
}
