//! Electrode-aware mapping from graph edges to device records.

use mn_graph::{ElectrodePair, Graph, NodeKey};

use crate::device::DeviceRecord;
use crate::error::NetlistResult;

pub const INPUT_NODE: &str = "vin";
pub const GROUND_NODE: &str = "gnd";

/// Emit one `DeviceRecord` per edge, in graph edge order.
///
/// Endpoints equal to the input electrode become `vin`, endpoints equal to
/// the ground electrode become `gnd`, and every other node gets a name from
/// [`node_name`]. Records are numbered from zero.
pub fn map_devices(graph: &Graph, electrodes: &ElectrodePair) -> NetlistResult<Vec<DeviceRecord>> {
    electrodes.check(graph)?;

    let width = grid_width(graph);
    let resolve = |key: NodeKey| -> String {
        if key == electrodes.input {
            INPUT_NODE.to_string()
        } else if key == electrodes.ground {
            GROUND_NODE.to_string()
        } else {
            node_name(key, width)
        }
    };

    let records: Vec<DeviceRecord> = graph
        .edge_keys()
        .enumerate()
        .map(|(index, (a, b))| DeviceRecord::new(index, resolve(a), resolve(b)))
        .collect();

    tracing::debug!(
        devices = records.len(),
        input = %electrodes.input,
        ground = %electrodes.ground,
        "devices mapped"
    );
    Ok(records)
}

/// SPICE node name for a non-electrode node.
///
/// Integer nodes become `n{i}`. Grid nodes become `n` followed by the row and
/// column, each zero-padded to `width` digits so that, e.g., `(1, 11)` and
/// `(11, 1)` stay distinct. With single-digit coordinates the padding is a
/// no-op and `(2, 3)` is simply `n23`.
pub fn node_name(key: NodeKey, width: usize) -> String {
    match key {
        NodeKey::Index(i) => format!("n{i}"),
        NodeKey::Grid(r, c) => format!("n{r:0width$}{c:0width$}"),
    }
}

/// Digits needed for the largest grid coordinate in the graph.
fn grid_width(graph: &Graph) -> usize {
    let max = graph
        .nodes()
        .iter()
        .filter_map(|key| match key {
            NodeKey::Grid(r, c) => Some((*r).max(*c)),
            NodeKey::Index(_) => None,
        })
        .max()
        .unwrap_or(0);
    max.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mn_graph::{GraphError, NetworkSpec, TopologyBuilder};

    use crate::error::NetlistError;

    #[test]
    fn single_device_maps_to_vin_gnd() {
        let spec = NetworkSpec::SingleDevice;
        let graph = TopologyBuilder::new(spec.clone()).build().unwrap();
        let records = map_devices(&graph, &spec.default_electrodes()).unwrap();
        assert_eq!(records, vec![DeviceRecord::new(0, "vin", "gnd")]);
    }

    #[test]
    fn grid_names_are_padded_when_needed() {
        assert_eq!(node_name(NodeKey::grid(2, 3), 1), "n23");
        assert_eq!(node_name(NodeKey::grid(1, 11), 2), "n0111");
        assert_eq!(node_name(NodeKey::grid(11, 1), 2), "n1101");
        assert_eq!(node_name(NodeKey::Index(17), 1), "n17");
    }

    #[test]
    fn width_follows_largest_coordinate() {
        let graph = TopologyBuilder::new(NetworkSpec::Grid2D { rows: 2, cols: 12 })
            .build()
            .unwrap();
        assert_eq!(grid_width(&graph), 2);

        let small = TopologyBuilder::new(NetworkSpec::Grid2D { rows: 3, cols: 3 })
            .build()
            .unwrap();
        assert_eq!(grid_width(&small), 1);
    }

    #[test]
    fn foreign_electrode_is_rejected() {
        let spec = NetworkSpec::Grid2D { rows: 2, cols: 2 };
        let graph = TopologyBuilder::new(spec).build().unwrap();
        let electrodes = ElectrodePair::new(NodeKey::grid(0, 0), NodeKey::grid(4, 4));
        let err = map_devices(&graph, &electrodes).unwrap_err();
        assert_eq!(
            err,
            NetlistError::Graph(GraphError::ElectrodeNotInGraph {
                node: NodeKey::grid(4, 4)
            })
        );
    }
}
