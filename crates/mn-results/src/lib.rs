//! mn-results: run folders, artifact paths, manifests and result tables.

pub mod hash;
pub mod layout;
pub mod table;
pub mod types;

use std::path::PathBuf;

pub use hash::fingerprint;
pub use layout::{ArtifactLayout, DEFAULT_ROOT};
pub use table::ResultTable;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    /// Storage refused to create a directory or file.
    #[error("Cannot create {path}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed result table at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Run not found: {run_dir}")]
    RunNotFound { run_dir: PathBuf },
}
