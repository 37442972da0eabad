//! Error types for the mn-app service layer.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Request error: {0}")]
    Request(#[from] mn_project::ProjectError),

    #[error("Network error: {0}")]
    Graph(#[from] mn_graph::GraphError),

    #[error("Netlist error: {0}")]
    Netlist(#[from] mn_netlist::NetlistError),

    #[error("Results error: {0}")]
    Results(#[from] mn_results::ResultsError),

    #[error("Failed to launch simulator {program}: {source}")]
    SimulatorLaunch {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("Simulator exited with {status}; see {log}")]
    SimulatorFailed { status: String, log: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
