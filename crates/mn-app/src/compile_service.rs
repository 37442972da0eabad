//! Request → netlist files on disk.

use chrono::Utc;
use mn_graph::Graph;
use mn_netlist::{
    CircuitPlan, DeviceRecord, DeviceTemplate, ExportDirective, compile_circuit,
    compile_subcircuit, export_magnitudes, map_devices,
};
use mn_project::SimulationRequest;
use mn_results::{
    ArtifactLayout, ExportParameters, RunArtifacts, RunContext, RunManifest, fingerprint,
};

use crate::error::AppResult;
use crate::request_service::{NetworkSummary, summarize};

/// A run whose netlists and manifest have been written.
#[derive(Debug, Clone)]
pub struct CompiledRun {
    pub context: RunContext,
    pub artifacts: RunArtifacts,
    pub manifest: RunManifest,
    pub network: NetworkSummary,
    pub devices: Vec<DeviceRecord>,
}

/// Build the network, map it to devices, and write the subcircuit file,
/// circuit file and manifest into a fresh run folder.
///
/// The subcircuit file is written before the circuit is compiled; a failure
/// afterwards leaves it in place.
pub fn compile_request(
    request: &SimulationRequest,
    layout: &ArtifactLayout,
) -> AppResult<CompiledRun> {
    let topology = request.topology()?;
    let graph = topology.build()?;
    let electrodes = request.electrodes(topology.spec());
    let devices = map_devices(&graph, &electrodes)?;

    let export = ExportParameters::new(&request.export.folder_name, &request.export.file_name);
    let context = RunContext::new(request.model, export);
    let artifacts = layout.resolve(&context);

    let template = DeviceTemplate::for_model(request.model)?;
    let subcircuit = request.subcircuit_def();
    let subcircuit_text = compile_subcircuit(request.model, &subcircuit, &template)?;
    layout.write_artifact(&artifacts, &artifacts.subcircuit, &subcircuit_text)?;

    let source = request.voltage_source();
    let magnitudes = export_magnitudes(&source, &devices, &request.export.magnitudes);
    let plan = CircuitPlan {
        model: request.model,
        subcircuit_path: artifacts.subcircuit.clone(),
        subcircuit_name: subcircuit.name.clone(),
        source,
        devices,
        analysis: request.analysis(),
        export: ExportDirective {
            result_path: artifacts.results.clone(),
            magnitudes,
        },
    };
    let circuit_text = compile_circuit(&plan)?;
    layout.write_artifact(&artifacts, &artifacts.circuit, &circuit_text)?;

    let network = summarize(&request.network.kind, &graph);
    let manifest = manifest(request, &context, &graph, plan.devices.len())?;
    layout.save_manifest(&artifacts, &manifest)?;

    tracing::info!(
        model = %request.model,
        devices = plan.devices.len(),
        run_dir = %artifacts.run_dir.display(),
        "netlists written"
    );

    Ok(CompiledRun {
        context,
        artifacts,
        manifest,
        network,
        devices: plan.devices,
    })
}

fn manifest(
    request: &SimulationRequest,
    context: &RunContext,
    graph: &Graph,
    device_count: usize,
) -> AppResult<RunManifest> {
    Ok(RunManifest {
        model: context.model,
        folder_name: context.export.folder_name().to_string(),
        file_name: context.export.file_name().to_string(),
        timestamp: Utc::now().to_rfc3339(),
        network: request.network.kind.clone(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        device_count,
        seed: graph.seed(),
        fingerprint: fingerprint(request)?,
    })
}
