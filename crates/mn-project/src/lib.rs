//! mn-project: simulation request files and their validation.

pub mod schema;
pub mod validate;

use std::path::Path;

pub use schema::*;
pub use validate::{ValidationError, validate_request};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] mn_graph::GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a request, picking the format from the extension (`.json` or YAML).
pub fn load(path: &Path) -> ProjectResult<SimulationRequest> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json { load_json(path) } else { load_yaml(path) }
}

pub fn load_yaml(path: &Path) -> ProjectResult<SimulationRequest> {
    let content = std::fs::read_to_string(path)?;
    let request: SimulationRequest = serde_yaml::from_str(&content)?;
    check(&request)?;
    Ok(request)
}

pub fn save_yaml(path: &Path, request: &SimulationRequest) -> ProjectResult<()> {
    check(request)?;
    let content = serde_yaml::to_string(request)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<SimulationRequest> {
    let content = std::fs::read_to_string(path)?;
    let request: SimulationRequest = serde_json::from_str(&content)?;
    check(&request)?;
    Ok(request)
}

pub fn save_json(path: &Path, request: &SimulationRequest) -> ProjectResult<()> {
    check(request)?;
    let content = serde_json::to_string_pretty(request)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Value checks plus a dry conversion of the network section, so a bad
/// topology is reported when the file is loaded.
fn check(request: &SimulationRequest) -> ProjectResult<()> {
    validate_request(request)?;
    request.network_spec()?;
    Ok(())
}
