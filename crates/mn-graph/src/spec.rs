//! Network descriptions.
//!
//! `NetworkParameters` is the flat bag of optional fields a request file
//! carries; `NetworkSpec` is the typed, validated form every generator
//! consumes. `NetworkSpec::from_parameters` is the only place a missing
//! variant field is reported.

use core::fmt;
use core::str::FromStr;

use mn_core::ensure_probability;
use serde::{Deserialize, Serialize};

use crate::electrodes::ElectrodePair;
use crate::error::{GraphError, GraphResult};
use crate::key::NodeKey;

/// The topology families, named as request files name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkKind {
    SingleDevice,
    Grid2D,
    RandomRegular,
    WattsStrogatz,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 4] = [
        Self::SingleDevice,
        Self::Grid2D,
        Self::RandomRegular,
        Self::WattsStrogatz,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleDevice => "SINGLE_DEVICE",
            Self::Grid2D => "GRID_2D_GRAPH",
            Self::RandomRegular => "RANDOM_REGULAR_GRAPH",
            Self::WattsStrogatz => "WATTS_STROGATZ_GRAPH",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GraphError::UnsupportedTopology {
                kind: s.to_string(),
            })
    }
}

/// Loosely-typed network fields as they appear in a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_connections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_nodes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// A validated-on-demand network description.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkSpec {
    /// One device between the two electrodes.
    SingleDevice,
    /// `rows` x `cols` lattice addressed by `(row, col)`.
    Grid2D { rows: u32, cols: u32 },
    /// Every node has exactly `degree` neighbours.
    RandomRegular {
        degree: u32,
        node_count: u32,
        seed: Option<u64>,
    },
    /// Ring lattice with `degree` nearest neighbours, each edge rewired
    /// with `rewire_probability`.
    WattsStrogatz {
        degree: u32,
        node_count: u32,
        rewire_probability: f64,
        seed: Option<u64>,
    },
}

impl NetworkSpec {
    /// Assemble a network description from the flat request fields, requiring
    /// exactly the fields the chosen kind needs.
    pub fn from_parameters(kind: NetworkKind, params: &NetworkParameters) -> GraphResult<Self> {
        let spec = match kind {
            NetworkKind::SingleDevice => NetworkSpec::SingleDevice,
            NetworkKind::Grid2D => match (params.n, params.m) {
                (Some(rows), Some(cols)) => NetworkSpec::Grid2D { rows, cols },
                (n, m) => {
                    return Err(GraphError::invalid(format!(
                        "\"n\" and \"m\" must be integers > 0 for {kind}, got n={n:?} m={m:?}"
                    )));
                }
            },
            NetworkKind::RandomRegular => match (params.amount_connections, params.amount_nodes) {
                (Some(degree), Some(node_count)) => NetworkSpec::RandomRegular {
                    degree,
                    node_count,
                    seed: params.seed,
                },
                _ => {
                    return Err(GraphError::invalid(format!(
                        "\"amount_connections\" and \"amount_nodes\" are required for {kind}"
                    )));
                }
            },
            NetworkKind::WattsStrogatz => match (
                params.amount_connections,
                params.amount_nodes,
                params.shortcut_probability,
            ) {
                (Some(degree), Some(node_count), Some(rewire_probability)) => {
                    NetworkSpec::WattsStrogatz {
                        degree,
                        node_count,
                        rewire_probability,
                        seed: params.seed,
                    }
                }
                _ => {
                    return Err(GraphError::invalid(format!(
                        "\"amount_connections\", \"amount_nodes\" and \"shortcut_probability\" are required for {kind}"
                    )));
                }
            },
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn kind(&self) -> NetworkKind {
        match self {
            NetworkSpec::SingleDevice => NetworkKind::SingleDevice,
            NetworkSpec::Grid2D { .. } => NetworkKind::Grid2D,
            NetworkSpec::RandomRegular { .. } => NetworkKind::RandomRegular,
            NetworkSpec::WattsStrogatz { .. } => NetworkKind::WattsStrogatz,
        }
    }

    /// Seed requested for the random families.
    pub fn seed(&self) -> Option<u64> {
        match self {
            NetworkSpec::RandomRegular { seed, .. } | NetworkSpec::WattsStrogatz { seed, .. } => {
                *seed
            }
            _ => None,
        }
    }

    /// Check the per-family feasibility rules.
    pub fn validate(&self) -> GraphResult<()> {
        match *self {
            NetworkSpec::SingleDevice => Ok(()),
            NetworkSpec::Grid2D { rows, cols } => {
                if rows == 0 || cols == 0 {
                    return Err(GraphError::invalid(format!(
                        "grid dimensions must be > 0, got {rows}x{cols}"
                    )));
                }
                Ok(())
            }
            NetworkSpec::RandomRegular {
                degree, node_count, ..
            } => {
                if node_count < 2 {
                    return Err(GraphError::invalid(format!(
                        "random regular graph needs at least 2 nodes, got {node_count}"
                    )));
                }
                if degree >= node_count {
                    return Err(GraphError::invalid(format!(
                        "degree {degree} must be smaller than node count {node_count}"
                    )));
                }
                if (u64::from(degree) * u64::from(node_count)) % 2 != 0 {
                    return Err(GraphError::invalid(format!(
                        "degree * node count must be even, got {degree} * {node_count}"
                    )));
                }
                Ok(())
            }
            NetworkSpec::WattsStrogatz {
                degree,
                node_count,
                rewire_probability,
                ..
            } => {
                if node_count < 2 {
                    return Err(GraphError::invalid(format!(
                        "small-world graph needs at least 2 nodes, got {node_count}"
                    )));
                }
                if degree > node_count {
                    return Err(GraphError::invalid(format!(
                        "degree {degree} must not exceed node count {node_count}"
                    )));
                }
                ensure_probability(rewire_probability, "rewire_probability")?;
                Ok(())
            }
        }
    }

    /// Electrodes used when a request names none: the origin corner and the
    /// far corner of the first column for grids, node 0 and node
    /// `node_count / 2` otherwise.
    pub fn default_electrodes(&self) -> ElectrodePair {
        match *self {
            NetworkSpec::SingleDevice => ElectrodePair::new(NodeKey::Index(0), NodeKey::Index(1)),
            NetworkSpec::Grid2D { rows, .. } => ElectrodePair::new(
                NodeKey::grid(0, 0),
                NodeKey::grid(rows.saturating_sub(1), 0),
            ),
            NetworkSpec::RandomRegular { node_count, .. }
            | NetworkSpec::WattsStrogatz { node_count, .. } => {
                ElectrodePair::new(NodeKey::Index(0), NodeKey::Index(node_count / 2))
            }
        }
    }
}
