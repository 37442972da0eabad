//! Graph-specific error types.

use mn_core::CoreError;
use thiserror::Error;

use crate::key::NodeKey;

pub type GraphResult<T> = Result<T, GraphError>;

/// Topology construction, validation and electrode errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Missing or contradictory topology fields.
    #[error("Invalid network parameters: {message}")]
    InvalidParameters { message: String },

    /// A probability outside [0, 1].
    #[error("Probability {what} must lie in [0, 1], got {value}")]
    InvalidProbability { what: &'static str, value: f64 },

    /// A network type name this crate does not implement.
    #[error("Unsupported topology: {kind}")]
    UnsupportedTopology { kind: String },

    /// An edge would connect a node to itself.
    #[error("Self-loop on node {node}")]
    SelfLoop { node: NodeKey },

    /// The same undirected edge was added twice.
    #[error("Duplicate edge between {a} and {b}")]
    DuplicateEdge { a: NodeKey, b: NodeKey },

    /// An edge refers to a node that was never added.
    #[error("Unknown node {node}")]
    UnknownNode { node: NodeKey },

    /// Random regular pairing failed on every attempt.
    #[error("Random regular graph generation failed after {attempts} attempts")]
    GenerationFailed { attempts: usize },

    /// An electrode is not a member of the generated node set.
    #[error("Electrode node {node} is not in the graph")]
    ElectrodeNotInGraph { node: NodeKey },

    /// Input and ground electrodes name the same node.
    #[error("Input and ground electrodes are the same node {node}")]
    CoincidentElectrodes { node: NodeKey },
}

impl GraphError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GraphError::InvalidParameters {
            message: message.into(),
        }
    }
}

impl From<CoreError> for GraphError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidProbability { what, value } => {
                GraphError::InvalidProbability { what, value }
            }
            other => GraphError::InvalidParameters {
                message: other.to_string(),
            },
        }
    }
}
