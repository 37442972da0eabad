//! Error types for netlist mapping and compilation.

use mn_core::ModelFamily;
use mn_graph::GraphError;
use thiserror::Error;

pub type NetlistResult<T> = Result<T, NetlistError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetlistError {
    /// Electrode problems surface from the graph layer.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A component names a SPICE model the subcircuit never declares.
    #[error("Component {component} uses model {model}, which has no .model dependency")]
    MissingModelDependency { component: String, model: String },

    /// No device template exists for this family.
    #[error("No device template for model {model}")]
    UnsupportedModel { model: ModelFamily },

    /// Subcircuit terminals differ from the ones the device template wires.
    #[error("Subcircuit terminals must be \"{expected}\", got \"{found}\"")]
    TerminalMismatch { expected: String, found: String },

    #[error("Invalid waveform: {message}")]
    InvalidWaveform { message: String },
}
