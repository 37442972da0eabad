//! Request validation logic.

use mn_core::ensure_finite;
use mn_netlist::MEMRISTOR_TERMINALS;

use crate::schema::SimulationRequest;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field}")]
    Missing { field: String },
}

pub fn validate_request(request: &SimulationRequest) -> Result<(), ValidationError> {
    for (name, value) in request.model_parameters.entries() {
        finite(&format!("model_parameters.{name}"), value)?;
    }

    if request.subcircuit.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "subcircuit.name".to_string(),
        });
    }
    if !request
        .subcircuit
        .nodes
        .iter()
        .map(String::as_str)
        .eq(MEMRISTOR_TERMINALS)
    {
        return Err(invalid(
            "subcircuit.nodes",
            request.subcircuit.nodes.join(" "),
            "device templates are wired for the terminals \"pl mn x\"",
        ));
    }

    if request.network.kind.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "network.type".to_string(),
        });
    }
    if let Some(p) = request.network.removal_probability {
        finite("network.removal_probability", p)?;
    }

    request
        .source
        .waveform
        .validate()
        .map_err(|e| invalid("source.waveform", request.source.waveform.kind(), &e.to_string()))?;

    validate_analysis(request)?;

    name("export.folder_name", &request.export.folder_name)?;
    name("export.file_name", &request.export.file_name)?;
    for magnitude in &request.export.magnitudes {
        if magnitude.trim().is_empty() || magnitude.contains(char::is_whitespace) {
            return Err(invalid(
                "export.magnitudes",
                format!("{magnitude:?}"),
                "vector names must be non-empty and contain no whitespace",
            ));
        }
    }

    if request.iterations == 0 {
        return Err(invalid("iterations", 0, "at least one iteration is required"));
    }

    Ok(())
}

fn validate_analysis(request: &SimulationRequest) -> Result<(), ValidationError> {
    let analysis = &request.analysis;
    positive("analysis.step", analysis.step)?;
    positive("analysis.stop", analysis.stop)?;
    if analysis.step > analysis.stop {
        return Err(invalid(
            "analysis.step",
            analysis.step,
            "step must not exceed the stop time",
        ));
    }
    if let Some(start) = analysis.start {
        finite("analysis.start", start)?;
        if start < 0.0 || start >= analysis.stop {
            return Err(invalid(
                "analysis.start",
                start,
                "start must lie in [0, stop)",
            ));
        }
    }
    if let Some(max_step) = analysis.max_step {
        positive("analysis.max_step", max_step)?;
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    ensure_finite(value, "value").map_err(|_| invalid(field, value, "must be finite"))
}

fn positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, value, "must be positive"));
    }
    Ok(value)
}

/// Export names become file and folder names.
fn name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: field.to_string(),
        });
    }
    if value.contains(['/', '\\']) || value == "." || value == ".." {
        return Err(invalid(
            field,
            value,
            "must be a plain name without path separators",
        ));
    }
    Ok(())
}
