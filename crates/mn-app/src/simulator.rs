//! External circuit simulator.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use crate::error::{AppError, AppResult};

/// Runs a compiled circuit file once.
///
/// Implementations append whatever the simulator prints to `log` and
/// return the wall-clock time of the run.
pub trait Simulator {
    fn name(&self) -> &str;

    fn simulate(&self, circuit: &Path, log: &Path) -> AppResult<Duration>;
}

/// ngspice in batch mode: `ngspice -b <circuit>`.
#[derive(Debug, Clone)]
pub struct Ngspice {
    program: PathBuf,
}

impl Default for Ngspice {
    fn default() -> Self {
        Self::new("ngspice")
    }
}

impl Ngspice {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Simulator for Ngspice {
    fn name(&self) -> &str {
        "ngspice"
    }

    fn simulate(&self, circuit: &Path, log: &Path) -> AppResult<Duration> {
        tracing::debug!(program = %self.program.display(), circuit = %circuit.display(), "launching simulator");

        let started = Instant::now();
        let output = Command::new(&self.program)
            .arg("-b")
            .arg(circuit)
            .output()
            .map_err(|source| AppError::SimulatorLaunch {
                program: self.program.clone(),
                source,
            })?;
        let elapsed = started.elapsed();

        let mut file = OpenOptions::new().create(true).append(true).open(log)?;
        file.write_all(&output.stdout)?;
        file.write_all(&output.stderr)?;

        if !output.status.success() {
            return Err(AppError::SimulatorFailed {
                status: output.status.to_string(),
                log: log.to_path_buf(),
            });
        }
        Ok(elapsed)
    }
}
