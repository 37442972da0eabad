//! Request loading and network introspection.

use std::collections::BTreeMap;
use std::path::Path;

use mn_graph::Graph;
use mn_project::SimulationRequest;
use serde::Serialize;

use crate::error::AppResult;

/// Shape of the network a request describes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub kind: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub components: usize,
    pub seed: Option<u64>,
    /// Degree → number of nodes with that degree.
    pub degree_histogram: BTreeMap<usize, usize>,
}

impl NetworkSummary {
    pub fn is_connected(&self) -> bool {
        self.components == 1
    }
}

/// Load a YAML or JSON request and validate it.
pub fn load_request(path: &Path) -> AppResult<SimulationRequest> {
    let request = mn_project::load(path)?;
    tracing::debug!(path = %path.display(), model = %request.model, "request loaded");
    Ok(request)
}

/// Build the request's network and describe it.
pub fn summarize_network(request: &SimulationRequest) -> AppResult<(Graph, NetworkSummary)> {
    let graph = request.topology()?.build()?;
    let summary = summarize(&request.network.kind, &graph);
    Ok((graph, summary))
}

pub(crate) fn summarize(kind: &str, graph: &Graph) -> NetworkSummary {
    let mut degree_histogram = BTreeMap::new();
    for degree in graph.degrees() {
        *degree_histogram.entry(degree).or_insert(0) += 1;
    }
    NetworkSummary {
        kind: kind.to_string(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        components: graph.component_count(),
        seed: graph.seed(),
        degree_histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mn_graph::{NetworkSpec, TopologyBuilder};

    #[test]
    fn grid_histogram() {
        let graph = TopologyBuilder::new(NetworkSpec::Grid2D { rows: 3, cols: 3 })
            .build()
            .unwrap();
        let summary = summarize("GRID_2D_GRAPH", &graph);
        assert_eq!(summary.node_count, 9);
        assert_eq!(summary.edge_count, 12);
        assert!(summary.is_connected());
        // 4 corners, 4 edge midpoints, 1 centre.
        assert_eq!(
            summary.degree_histogram,
            BTreeMap::from([(2, 4), (3, 4), (4, 1)])
        );
    }
}
