//! Simulation request schema.

use std::str::FromStr;

use mn_core::ModelFamily;
use mn_graph::{
    ElectrodePair, GraphResult, NetworkKind, NetworkParameters, NetworkSpec, NodeKey,
    TopologyBuilder,
};
use mn_netlist::{Analysis, ModelParameters, SubcircuitDef, VoltageSource, Waveform};
use serde::{Deserialize, Serialize};

fn one() -> u32 {
    1
}

fn default_subcircuit_name() -> String {
    mn_netlist::model::DEFAULT_SUBCIRCUIT_NAME.to_string()
}

fn default_subcircuit_nodes() -> Vec<String> {
    mn_netlist::MEMRISTOR_TERMINALS
        .iter()
        .map(|node| node.to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationRequest {
    pub model: ModelFamily,
    pub model_parameters: ModelParameters,
    #[serde(default)]
    pub subcircuit: SubcircuitSection,
    pub network: NetworkSection,
    pub source: SourceSection,
    pub analysis: AnalysisSection,
    pub export: ExportSection,
    /// Number of simulator repetitions.
    #[serde(default = "one")]
    pub iterations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubcircuitSection {
    #[serde(default = "default_subcircuit_name")]
    pub name: String,
    #[serde(default = "default_subcircuit_nodes")]
    pub nodes: Vec<String>,
}

impl Default for SubcircuitSection {
    fn default() -> Self {
        Self {
            name: default_subcircuit_name(),
            nodes: default_subcircuit_nodes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSection {
    /// Topology name, e.g. `GRID_2D_GRAPH`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parameters: NetworkParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removal_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electrodes: Option<ElectrodeSection>,
}

/// Either electrode may be left out to use the family default.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ElectrodeSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<NodeKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground: Option<NodeKey>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceSection {
    #[serde(default = "one")]
    pub number: u32,
    pub waveform: Waveform,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSection {
    pub step: f64,
    pub stop: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_step: Option<f64>,
    #[serde(default)]
    pub uic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportSection {
    pub folder_name: String,
    pub file_name: String,
    /// Vectors exported in addition to the input voltage, source current
    /// and device states.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub magnitudes: Vec<String>,
}

impl SimulationRequest {
    pub fn network_kind(&self) -> GraphResult<NetworkKind> {
        NetworkKind::from_str(&self.network.kind)
    }

    pub fn network_spec(&self) -> GraphResult<NetworkSpec> {
        NetworkSpec::from_parameters(self.network_kind()?, &self.network.parameters)
    }

    pub fn topology(&self) -> GraphResult<TopologyBuilder> {
        let builder = TopologyBuilder::new(self.network_spec()?);
        Ok(match self.network.removal_probability {
            Some(p) => builder.removal_probability(p),
            None => builder,
        })
    }

    pub fn electrodes(&self, spec: &NetworkSpec) -> ElectrodePair {
        let section = self.network.electrodes.unwrap_or_default();
        ElectrodePair::resolve(spec, section.input, section.ground)
    }

    pub fn subcircuit_def(&self) -> SubcircuitDef {
        SubcircuitDef {
            name: self.subcircuit.name.clone(),
            nodes: self.subcircuit.nodes.clone(),
            parameters: self.model_parameters,
        }
    }

    pub fn voltage_source(&self) -> VoltageSource {
        VoltageSource::across_electrodes(self.source.number, self.source.waveform.clone())
    }

    pub fn analysis(&self) -> Analysis {
        Analysis::Transient {
            step: self.analysis.step,
            stop: self.analysis.stop,
            start: self.analysis.start,
            max_step: self.analysis.max_step,
            uic: self.analysis.uic,
        }
    }
}
