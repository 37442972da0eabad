//! Compile-and-simulate service.

use std::time::Instant;

use mn_project::SimulationRequest;
use mn_results::{ArtifactLayout, ResultTable, TimingSummary};

use crate::compile_service::{CompiledRun, compile_request};
use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage, emit};
use crate::simulator::Simulator;

#[derive(Debug, Clone)]
pub struct RunResponse {
    pub compiled: CompiledRun,
    /// Per-iteration simulator wall-clock times.
    pub timing: TimingSummary,
    /// The result table, when the simulator produced one.
    pub results: Option<ResultTable>,
}

pub fn run_request(
    request: &SimulationRequest,
    layout: &ArtifactLayout,
    simulator: &dyn Simulator,
) -> AppResult<RunResponse> {
    run_request_with_progress(request, layout, simulator, None)
}

/// Compile the request, then run the simulator `request.iterations` times
/// on the same circuit file.
pub fn run_request_with_progress(
    request: &SimulationRequest,
    layout: &ArtifactLayout,
    simulator: &dyn Simulator,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();

    emit(&mut progress_cb, RunStage::CompilingNetlists, started);
    let compiled = compile_request(request, layout)?;

    let iterations = request.iterations.max(1);
    let mut samples = Vec::with_capacity(iterations as usize);
    for iteration in 1..=iterations {
        emit(
            &mut progress_cb,
            RunStage::Simulating {
                iteration,
                of: iterations,
            },
            started,
        );
        let elapsed = simulator.simulate(&compiled.artifacts.circuit, &compiled.artifacts.log)?;
        tracing::info!(
            simulator = simulator.name(),
            iteration,
            elapsed_s = elapsed.as_secs_f64(),
            "simulation finished"
        );
        samples.push(elapsed.as_secs_f64());
    }
    // `samples` holds at least one entry.
    let timing = TimingSummary::from_samples(&samples).unwrap_or(TimingSummary {
        iterations: 0,
        min_s: 0.0,
        mean_s: 0.0,
        max_s: 0.0,
    });

    emit(&mut progress_cb, RunStage::LoadingResults, started);
    let results = if compiled.artifacts.results.exists() {
        Some(ResultTable::load(&compiled.artifacts.results)?)
    } else {
        tracing::warn!(
            path = %compiled.artifacts.results.display(),
            "simulator wrote no result table"
        );
        None
    };

    emit(&mut progress_cb, RunStage::Completed, started);
    Ok(RunResponse {
        compiled,
        timing,
        results,
    })
}
