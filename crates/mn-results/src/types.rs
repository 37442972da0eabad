//! Run identity and artifact path types.

use std::path::PathBuf;

use chrono::Utc;
use mn_core::ModelFamily;
use serde::{Deserialize, Serialize};

/// Where a run's output goes.
///
/// The creation timestamp is appended to the folder name once, in the
/// constructor. Everything derived from the value afterwards reuses that
/// suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParameters {
    folder_name: String,
    file_name: String,
    timestamp: i64,
}

impl ExportParameters {
    /// Stamp `folder_name` with the current Unix time in seconds.
    pub fn new(folder_name: &str, file_name: &str) -> Self {
        Self::with_timestamp(folder_name, file_name, Utc::now().timestamp())
    }

    pub fn with_timestamp(folder_name: &str, file_name: &str, timestamp: i64) -> Self {
        Self {
            folder_name: format!("{folder_name}_{timestamp}"),
            file_name: file_name.to_string(),
            timestamp,
        }
    }

    /// Folder name including the timestamp suffix.
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Inputs to every path lookup for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub model: ModelFamily,
    pub export: ExportParameters,
}

impl RunContext {
    pub fn new(model: ModelFamily, export: ExportParameters) -> Self {
        Self { model, export }
    }
}

/// Resolved paths for one run. Resolving creates nothing on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunArtifacts {
    pub run_dir: PathBuf,
    pub subcircuit: PathBuf,
    pub circuit: PathBuf,
    pub results: PathBuf,
    pub log: PathBuf,
    pub figures_dir: PathBuf,
    pub manifest: PathBuf,
}

/// Record of a compiled run, written next to its netlists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub model: ModelFamily,
    pub folder_name: String,
    pub file_name: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
    pub network: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub device_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// SHA-256 of the request that produced the run.
    pub fingerprint: String,
}

/// Wall-clock durations of repeated simulator runs, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    pub iterations: usize,
    pub min_s: f64,
    pub mean_s: f64,
    pub max_s: f64,
}

impl TimingSummary {
    /// `None` for an empty sample.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Some(Self {
            iterations: samples.len(),
            min_s: min,
            mean_s: mean,
            max_s: max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_appended_once() {
        let export = ExportParameters::with_timestamp("sweep", "out", 1_700_000_000);
        assert_eq!(export.folder_name(), "sweep_1700000000");
        let copy = export.clone();
        assert_eq!(copy.folder_name(), export.folder_name());
    }

    #[test]
    fn timing_summary_stats() {
        let summary = TimingSummary::from_samples(&[1.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary.iterations, 3);
        assert_eq!(summary.min_s, 1.0);
        assert_eq!(summary.max_s, 3.0);
        assert_eq!(summary.mean_s, 2.0);
        assert!(TimingSummary::from_samples(&[]).is_none());
    }
}
