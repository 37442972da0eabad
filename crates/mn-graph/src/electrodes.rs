//! Electrode selection.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::key::NodeKey;
use crate::spec::NetworkSpec;

/// The two graph nodes wired to the circuit's input source and ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectrodePair {
    pub input: NodeKey,
    pub ground: NodeKey,
}

impl ElectrodePair {
    pub fn new(input: NodeKey, ground: NodeKey) -> Self {
        Self { input, ground }
    }

    /// Fill whichever electrode is missing with the family default.
    pub fn resolve(spec: &NetworkSpec, input: Option<NodeKey>, ground: Option<NodeKey>) -> Self {
        let defaults = spec.default_electrodes();
        Self {
            input: input.unwrap_or(defaults.input),
            ground: ground.unwrap_or(defaults.ground),
        }
    }

    /// Both electrodes must be distinct members of the graph's node set.
    pub fn check(&self, graph: &Graph) -> GraphResult<()> {
        if self.input == self.ground {
            return Err(GraphError::CoincidentElectrodes { node: self.input });
        }
        for node in [self.input, self.ground] {
            if !graph.contains(&node) {
                return Err(GraphError::ElectrodeNotInGraph { node });
            }
        }
        Ok(())
    }
}
