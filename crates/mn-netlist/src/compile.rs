//! Netlist text generation.
//!
//! Both files are plain text with `*` comment headers and a fixed section
//! order. Lines end in `\n`.

use core::fmt::Write;
use std::path::PathBuf;

use mn_core::ModelFamily;

use crate::analysis::Analysis;
use crate::device::{DEVICE_PREFIX, DeviceRecord};
use crate::error::NetlistResult;
use crate::model::SubcircuitDef;
use crate::template::DeviceTemplate;
use crate::waveform::VoltageSource;

/// Render the subcircuit file shared by every device instance.
///
/// Sections: definition, `.model` dependencies (omitted when there are
/// none), behavioural sources, components, control commands, `.ends`.
pub fn compile_subcircuit(
    model: ModelFamily,
    subcircuit: &SubcircuitDef,
    template: &DeviceTemplate,
) -> NetlistResult<String> {
    subcircuit.check_terminals()?;
    template.check_dependencies()?;

    let mut out = String::new();
    let header = model.subcircuit_file_name();
    line(&mut out, format_args!("* MEMRISTOR SUBCIRCUIT - MODEL {header}"));

    section(&mut out, "SUBCIRCUITS");
    line(&mut out, format_args!("{}", subcircuit.definition_line()));

    if !template.dependencies.is_empty() {
        section(&mut out, "SPICE DEPENDENCIES");
        for dependency in &template.dependencies {
            line(&mut out, format_args!("{}", dependency.line()));
        }
    }

    section(&mut out, "SOURCES");
    for source in &template.sources {
        line(&mut out, format_args!("{}", source.line()));
    }

    section(&mut out, "COMPONENTS");
    for component in &template.components {
        line(&mut out, format_args!("{}", component.line()));
    }

    section(&mut out, "CONTROL COMMANDS");
    for command in &template.control_commands {
        line(&mut out, format_args!("{command}"));
    }

    out.push('\n');
    line(&mut out, format_args!(".ends"));

    tracing::debug!(model = %model, bytes = out.len(), "subcircuit compiled");
    Ok(out)
}

/// `wrdata` target: the result file and the vectors written to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDirective {
    pub result_path: PathBuf,
    pub magnitudes: Vec<String>,
}

impl ExportDirective {
    pub fn line(&self) -> String {
        format!(
            "wrdata {} {}",
            self.result_path.display(),
            self.magnitudes.join(" ")
        )
    }
}

/// Everything the top-level circuit file is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitPlan {
    pub model: ModelFamily,
    /// Path written into the `.include` line.
    pub subcircuit_path: PathBuf,
    /// Subcircuit each device instantiates.
    pub subcircuit_name: String,
    pub source: VoltageSource,
    pub devices: Vec<DeviceRecord>,
    pub analysis: Analysis,
    pub export: ExportDirective,
}

/// Render the top-level circuit file.
///
/// Sections: `.include` of the subcircuit, the source line followed by one
/// instance line per device in record order, the analysis directive, and
/// the control block ending in `.endc` and `.end`.
pub fn compile_circuit(plan: &CircuitPlan) -> NetlistResult<String> {
    plan.source.waveform.validate()?;

    let mut out = String::new();
    let header = plan.model.subcircuit_file_name();
    line(&mut out, format_args!("* MEMRISTOR CIRCUIT - MODEL {header}"));

    section(&mut out, "DEPENDENCIES");
    line(&mut out, format_args!(".include {}", plan.subcircuit_path.display()));

    section(&mut out, "COMPONENTS");
    line(&mut out, format_args!("{}", plan.source.line()));
    for device in &plan.devices {
        line(
            &mut out,
            format_args!("{}", device.instance_line(DEVICE_PREFIX, &plan.subcircuit_name)),
        );
    }

    section(&mut out, "ANALYSIS COMMANDS");
    line(&mut out, format_args!("{}", plan.analysis.directive()));

    section(&mut out, "CONTROL COMMANDS");
    for command in [".control", "run", "set wr_vecnames", "set wr_singlescale"] {
        line(&mut out, format_args!("{command}"));
    }
    line(&mut out, format_args!("{}", plan.export.line()));
    line(&mut out, format_args!("quit"));
    line(&mut out, format_args!(".endc"));
    line(&mut out, format_args!(".end"));

    tracing::debug!(
        model = %plan.model,
        devices = plan.devices.len(),
        bytes = out.len(),
        "circuit compiled"
    );
    Ok(out)
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    line(out, format_args!("* {title}:"));
}

fn line(out: &mut String, args: core::fmt::Arguments<'_>) {
    // Writing into a String cannot fail.
    let _ = out.write_fmt(args);
    out.push('\n');
}
