use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use mn_app::*;
use mn_core::ModelFamily;
use mn_results::ArtifactLayout;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

/// Writes a one-row table for the vectors named in the circuit's `wrdata` line.
struct FakeSimulator;

impl Simulator for FakeSimulator {
    fn name(&self) -> &str {
        "fake"
    }

    fn simulate(&self, circuit: &Path, log: &Path) -> AppResult<Duration> {
        let text = fs::read_to_string(circuit)?;
        let wrdata = text
            .lines()
            .find(|l| l.starts_with("wrdata "))
            .unwrap_or_default();
        let mut tokens = wrdata.split_whitespace().skip(1);
        let target = tokens.next().unwrap_or_default();
        let vectors: Vec<&str> = tokens.collect();

        let header = std::iter::once("time")
            .chain(vectors.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        let row = vec!["0"; vectors.len() + 1].join(" ");
        fs::write(target, format!("{header}\n{row}\n"))?;
        fs::write(log, "fake run\n")?;
        Ok(Duration::from_millis(5))
    }
}

struct FailingSimulator;

impl Simulator for FailingSimulator {
    fn name(&self) -> &str {
        "failing"
    }

    fn simulate(&self, _circuit: &Path, log: &Path) -> AppResult<Duration> {
        Err(AppError::SimulatorFailed {
            status: "exit status: 1".to_string(),
            log: log.to_path_buf(),
        })
    }
}

#[test]
fn compile_writes_both_netlists_and_manifest() {
    let root = unique_temp_dir("mn_app_compile");
    let layout = ArtifactLayout::new(&root);
    let request = load_request(&demo("02_grid_pulse.yaml")).unwrap();

    let compiled = compile_request(&request, &layout).unwrap();
    let artifacts = &compiled.artifacts;

    assert!(artifacts.run_dir.starts_with(root.join("pershin_simulations")));
    let folder = artifacts.run_dir.file_name().unwrap().to_string_lossy();
    assert!(folder.starts_with("grid_4x4_pulse_"));
    assert!(!artifacts.figures_dir.exists());

    let subcircuit = fs::read_to_string(&artifacts.subcircuit).unwrap();
    assert!(subcircuit.starts_with("* MEMRISTOR SUBCIRCUIT - MODEL pershin.sub\n"));

    let circuit = fs::read_to_string(&artifacts.circuit).unwrap();
    let include = format!(".include {}", artifacts.subcircuit.display());
    assert!(circuit.lines().any(|l| l == include));
    let device_lines = circuit.lines().filter(|l| l.starts_with("xmem")).count();
    assert_eq!(device_lines, compiled.devices.len());
    assert_eq!(compiled.manifest.device_count, compiled.devices.len());
    assert!(circuit.contains(" n12"));

    let loaded = layout.load_manifest(&artifacts.run_dir).unwrap();
    assert_eq!(loaded, compiled.manifest);
    assert_eq!(loaded.node_count, 16);
    assert_eq!(loaded.fingerprint.len(), 64);
    assert!(loaded.seed.is_some());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn vourkas_pipeline_declares_diode() {
    let root = unique_temp_dir("mn_app_vourkas");
    let layout = ArtifactLayout::new(&root);
    let request = load_request(&demo("03_small_world_pwl.yaml")).unwrap();
    assert_eq!(request.model, ModelFamily::Vourkas);

    let compiled = compile_request(&request, &layout).unwrap();
    let subcircuit = fs::read_to_string(&compiled.artifacts.subcircuit).unwrap();
    assert!(subcircuit.contains("* SPICE DEPENDENCIES:\n.model D d\n"));
    assert_eq!(compiled.network.node_count, 30);
    assert_eq!(compiled.manifest.seed, Some(2024));

    let circuit = fs::read_to_string(&compiled.artifacts.circuit).unwrap();
    assert!(circuit.contains("V1 vin gnd pwl(\n+ 0 0\n"));
    assert!(circuit.contains(".tran 0.0001 2 0 0.001"));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn run_repeats_and_reads_results() {
    let root = unique_temp_dir("mn_app_run");
    let layout = ArtifactLayout::new(&root);
    let request = load_request(&demo("02_grid_pulse.yaml")).unwrap();

    let mut stages = Vec::new();
    let response = run_request_with_progress(
        &request,
        &layout,
        &FakeSimulator,
        Some(&mut |event: RunProgressEvent| stages.push(event.stage)),
    )
    .unwrap();

    assert_eq!(response.timing.iterations, 3);
    assert!((response.timing.mean_s - 0.005).abs() < 1e-12);
    let table = response.results.unwrap();
    assert_eq!(table.columns()[..3], ["time", "vin", "i(v1)"]);
    assert_eq!(table.row_count(), 1);

    assert_eq!(stages.first(), Some(&RunStage::CompilingNetlists));
    assert_eq!(stages.last(), Some(&RunStage::Completed));
    let simulated = stages
        .iter()
        .filter(|s| matches!(s, RunStage::Simulating { .. }))
        .count();
    assert_eq!(simulated, 3);

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn simulator_failure_keeps_netlists() {
    let root = unique_temp_dir("mn_app_fail");
    let layout = ArtifactLayout::new(&root);
    let request = load_request(&demo("01_single_device_sine.yaml")).unwrap();

    let err = run_request(&request, &layout, &FailingSimulator).unwrap_err();
    assert!(matches!(err, AppError::SimulatorFailed { .. }));

    let runs = layout.list_runs(ModelFamily::Pershin).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].device_count, 1);

    let _ = fs::remove_dir_all(&root);
}
