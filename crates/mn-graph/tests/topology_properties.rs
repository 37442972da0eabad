//! Structural properties of generated topologies.

use mn_graph::{
    GraphError, NetworkKind, NetworkParameters, NetworkSpec, NodeKey, TopologyBuilder,
};
use proptest::prelude::*;

fn build(spec: NetworkSpec) -> mn_graph::Graph {
    TopologyBuilder::new(spec).build().unwrap()
}

#[test]
fn grid_two_by_two() {
    let graph = build(NetworkSpec::Grid2D { rows: 2, cols: 2 });
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.contains(&NodeKey::grid(1, 1)));
}

#[test]
fn single_device_is_one_edge() {
    let graph = build(NetworkSpec::SingleDevice);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn flat_parameters_drive_generation() {
    let params = NetworkParameters {
        amount_connections: Some(4),
        amount_nodes: Some(10),
        shortcut_probability: Some(0.3),
        seed: Some(2024),
        ..Default::default()
    };
    let spec = NetworkSpec::from_parameters(NetworkKind::WattsStrogatz, &params).unwrap();
    let first = build(spec.clone());
    let second = build(spec);

    assert_eq!(first.node_count(), 10);
    assert_eq!(first.edge_count(), 20);
    assert_eq!(
        first.edge_keys().collect::<Vec<_>>(),
        second.edge_keys().collect::<Vec<_>>()
    );
}

#[test]
fn removal_never_drops_nodes() {
    let graph = TopologyBuilder::new(NetworkSpec::Grid2D { rows: 3, cols: 3 })
        .removal_probability(1.0)
        .build()
        .unwrap();
    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.component_count(), 9);
}

#[test]
fn one_by_one_grid_is_a_lone_node() {
    let spec = NetworkSpec::Grid2D { rows: 1, cols: 1 };
    let graph = TopologyBuilder::new(spec.clone()).build().unwrap();
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_connected());

    assert_eq!(
        spec.default_electrodes().check(&graph),
        Err(GraphError::CoincidentElectrodes {
            node: NodeKey::grid(0, 0)
        })
    );
}

#[test]
fn unsupported_kind_name() {
    let err = "SCALE_FREE".parse::<NetworkKind>().unwrap_err();
    assert_eq!(
        err,
        GraphError::UnsupportedTopology {
            kind: "SCALE_FREE".to_string()
        }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn grid_counts(rows in 1_u32..12, cols in 1_u32..12) {
        let graph = build(NetworkSpec::Grid2D { rows, cols });
        prop_assert_eq!(graph.node_count() as u32, rows * cols);
        prop_assert_eq!(
            graph.edge_count() as u32,
            rows * (cols - 1) + (rows - 1) * cols
        );
    }

    #[test]
    fn random_regular_degrees(degree in 1_u32..6, half_nodes in 4_u32..15, seed in any::<u64>()) {
        let node_count = half_nodes * 2;
        let graph = build(NetworkSpec::RandomRegular { degree, node_count, seed: Some(seed) });
        prop_assert_eq!(graph.node_count() as u32, node_count);
        prop_assert!(graph.degrees().iter().all(|&d| d as u32 == degree));
    }

    #[test]
    fn unrewired_small_world_is_ring(half in 1_u32..4, node_count in 9_u32..30, seed in any::<u64>()) {
        let degree = half * 2;
        let graph = build(NetworkSpec::WattsStrogatz {
            degree,
            node_count,
            rewire_probability: 0.0,
            seed: Some(seed),
        });
        prop_assert_eq!(graph.edge_count() as u32, node_count * half);
        for u in 0..node_count {
            for j in 1..=half {
                prop_assert!(graph.has_edge(&NodeKey::Index(u), &NodeKey::Index((u + j) % node_count)));
            }
        }
    }

    #[test]
    fn zero_removal_keeps_edge_count(rows in 2_u32..8, cols in 2_u32..8, seed in any::<u64>()) {
        let graph = TopologyBuilder::new(NetworkSpec::Grid2D { rows, cols })
            .removal_probability(0.0)
            .seed(seed)
            .build()
            .unwrap();
        prop_assert_eq!(graph.edge_count() as u32, rows * (cols - 1) + (rows - 1) * cols);
    }

    #[test]
    fn no_self_loops(degree in 1_u32..5, half_nodes in 3_u32..12, p in 0.0_f64..=1.0, seed in any::<u64>()) {
        let graph = build(NetworkSpec::WattsStrogatz {
            degree,
            node_count: half_nodes * 2,
            rewire_probability: p,
            seed: Some(seed),
        });
        for (a, b) in graph.edge_keys() {
            prop_assert_ne!(a, b);
        }
    }
}
