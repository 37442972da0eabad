//! Artifact layout on disk.
//!
//! ```text
//! <root>/<family>_simulations/<folder>_<timestamp>/
//!     <family>.sub
//!     <family>_circuit_file.cir
//!     <file>_results.csv
//!     <folder>_<timestamp>.log
//!     manifest.json
//!     figures/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use mn_core::ModelFamily;

use crate::types::{RunArtifacts, RunContext, RunManifest};
use crate::{ResultsError, ResultsResult};

/// Root used when the caller does not pick one.
pub const DEFAULT_ROOT: &str = "simulation_results";

const MANIFEST_FILE: &str = "manifest.json";
const FIGURES_DIR: &str = "figures";

#[derive(Debug, Clone)]
pub struct ArtifactLayout {
    root: PathBuf,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl ArtifactLayout {
    /// Nothing is created until a run directory is first needed.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn family_dir(&self, model: ModelFamily) -> PathBuf {
        self.root.join(model.simulations_folder())
    }

    /// Paths for one run. Pure: the same context always yields the same paths.
    pub fn resolve(&self, ctx: &RunContext) -> RunArtifacts {
        let folder = ctx.export.folder_name();
        let run_dir = self.family_dir(ctx.model).join(folder);
        RunArtifacts {
            subcircuit: run_dir.join(ctx.model.subcircuit_file_name()),
            circuit: run_dir.join(ctx.model.circuit_file_name()),
            results: run_dir.join(format!("{}_results.csv", ctx.export.file_name())),
            log: run_dir.join(format!("{folder}.log")),
            figures_dir: run_dir.join(FIGURES_DIR),
            manifest: run_dir.join(MANIFEST_FILE),
            run_dir,
        }
    }

    /// Create the run directory and its parents. Repeat calls are no-ops.
    pub fn ensure_run_dir<'a>(&self, artifacts: &'a RunArtifacts) -> ResultsResult<&'a Path> {
        create_dir(&artifacts.run_dir)?;
        Ok(&artifacts.run_dir)
    }

    pub fn ensure_figures_dir<'a>(&self, artifacts: &'a RunArtifacts) -> ResultsResult<&'a Path> {
        create_dir(&artifacts.figures_dir)?;
        Ok(&artifacts.figures_dir)
    }

    /// Write `contents` to `path`, creating the run directory first.
    pub fn write_artifact(
        &self,
        artifacts: &RunArtifacts,
        path: &Path,
        contents: &str,
    ) -> ResultsResult<()> {
        self.ensure_run_dir(artifacts)?;
        fs::write(path, contents).map_err(|source| ResultsError::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
        Ok(())
    }

    pub fn save_manifest(
        &self,
        artifacts: &RunArtifacts,
        manifest: &RunManifest,
    ) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(manifest)?;
        self.write_artifact(artifacts, &artifacts.manifest, &json)
    }

    pub fn load_manifest(&self, run_dir: &Path) -> ResultsResult<RunManifest> {
        let path = run_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ResultsError::RunNotFound {
                run_dir: run_dir.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Manifests of every run stored for `model`, oldest folder name first.
    /// Folders without a readable manifest are skipped.
    pub fn list_runs(&self, model: ModelFamily) -> ResultsResult<Vec<RunManifest>> {
        let family_dir = self.family_dir(model);
        if !family_dir.exists() {
            return Ok(Vec::new());
        }

        let mut dirs = Vec::new();
        for entry in fs::read_dir(&family_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();

        Ok(dirs
            .iter()
            .filter_map(|dir| self.load_manifest(dir).ok())
            .collect())
    }
}

fn create_dir(path: &Path) -> ResultsResult<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| ResultsError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "directory created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExportParameters;

    #[test]
    fn resolve_follows_layout() {
        let layout = ArtifactLayout::new("sims");
        let ctx = RunContext::new(
            ModelFamily::Pershin,
            ExportParameters::with_timestamp("grid", "out", 42),
        );
        let artifacts = layout.resolve(&ctx);
        let run = PathBuf::from("sims/pershin_simulations/grid_42");
        assert_eq!(artifacts.run_dir, run);
        assert_eq!(artifacts.subcircuit, run.join("pershin.sub"));
        assert_eq!(artifacts.circuit, run.join("pershin_circuit_file.cir"));
        assert_eq!(artifacts.results, run.join("out_results.csv"));
        assert_eq!(artifacts.log, run.join("grid_42.log"));
        assert_eq!(artifacts.figures_dir, run.join("figures"));
    }

    #[test]
    fn resolve_is_repeatable() {
        let layout = ArtifactLayout::default();
        let ctx = RunContext::new(ModelFamily::Vourkas, ExportParameters::new("a", "b"));
        assert_eq!(layout.resolve(&ctx), layout.resolve(&ctx));
        assert!(layout.resolve(&ctx).run_dir.starts_with(DEFAULT_ROOT));
    }
}
