use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mn_app::{
    AppResult, Ngspice, RunProgressEvent, RunStage, compile_request, load_request,
    run_request_with_progress, summarize_network,
};
use mn_core::ModelFamily;
use mn_results::{ArtifactLayout, DEFAULT_ROOT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mn-cli")]
#[command(about = "memnet CLI - memristor network netlist compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a simulation request file
    Validate {
        /// Path to the request (YAML or JSON)
        request_path: PathBuf,
    },
    /// Build the request's network and describe it
    Graph {
        /// Path to the request (YAML or JSON)
        request_path: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the subcircuit and circuit netlists for a request
    Compile {
        /// Path to the request (YAML or JSON)
        request_path: PathBuf,
        /// Artifact root directory
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,
    },
    /// Compile a request and run the simulator on it
    Run {
        /// Path to the request (YAML or JSON)
        request_path: PathBuf,
        /// Artifact root directory
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,
        /// Simulator executable
        #[arg(long, default_value = "ngspice")]
        simulator: PathBuf,
    },
    /// List compiled runs for a model family
    Runs {
        /// Model family (pershin, vourkas, biolek)
        model: ModelFamily,
        /// Artifact root directory
        #[arg(long, default_value = DEFAULT_ROOT)]
        root: PathBuf,
    },
}

fn main() -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { request_path } => cmd_validate(&request_path),
        Commands::Graph { request_path, json } => cmd_graph(&request_path, json),
        Commands::Compile { request_path, root } => cmd_compile(&request_path, &root),
        Commands::Run {
            request_path,
            root,
            simulator,
        } => cmd_run(&request_path, &root, simulator),
        Commands::Runs { model, root } => cmd_runs(model, &root),
    }
}

fn cmd_validate(request_path: &Path) -> AppResult<()> {
    println!("Validating request: {}", request_path.display());
    let request = load_request(request_path)?;
    println!("✓ Request is valid");
    println!("  Model: {}", request.model);
    println!("  Network: {}", request.network.kind);
    Ok(())
}

fn cmd_graph(request_path: &Path, json: bool) -> AppResult<()> {
    let request = load_request(request_path)?;
    let (_graph, summary) = summarize_network(&request)?;

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!(error = %e, "failed to serialize summary"),
        }
        return Ok(());
    }

    println!("Network: {}", summary.kind);
    println!("  Nodes: {}", summary.node_count);
    println!("  Edges: {}", summary.edge_count);
    if let Some(seed) = summary.seed {
        println!("  Seed: {}", seed);
    }
    if summary.is_connected() {
        println!("  Connected: yes");
    } else {
        println!("  Connected: no ({} components)", summary.components);
    }
    println!("  Degree histogram:");
    for (degree, count) in &summary.degree_histogram {
        println!("    {:>3}: {}", degree, count);
    }
    Ok(())
}

fn cmd_compile(request_path: &Path, root: &Path) -> AppResult<()> {
    let request = load_request(request_path)?;
    let layout = ArtifactLayout::new(root);
    let compiled = compile_request(&request, &layout)?;

    println!("✓ Compiled {} devices", compiled.devices.len());
    println!("  Subcircuit: {}", compiled.artifacts.subcircuit.display());
    println!("  Circuit:    {}", compiled.artifacts.circuit.display());
    println!("  Results:    {}", compiled.artifacts.results.display());
    println!("  Manifest:   {}", compiled.artifacts.manifest.display());
    Ok(())
}

fn cmd_run(request_path: &Path, root: &Path, simulator: PathBuf) -> AppResult<()> {
    let request = load_request(request_path)?;
    let layout = ArtifactLayout::new(root);
    let simulator = Ngspice::new(simulator);

    println!(
        "Running {} simulation ({} iteration(s))",
        request.model, request.iterations
    );
    let response = run_request_with_progress(
        &request,
        &layout,
        &simulator,
        Some(&mut |event| render_cli_progress(&event)),
    )?;
    clear_progress_line();

    println!(
        "✓ Simulation completed: {}",
        response.compiled.artifacts.run_dir.display()
    );
    println!("\nTiming summary:");
    println!("  Iterations: {}", response.timing.iterations);
    println!("  Min:  {:.3}s", response.timing.min_s);
    println!("  Mean: {:.3}s", response.timing.mean_s);
    println!("  Max:  {:.3}s", response.timing.max_s);

    match &response.results {
        Some(table) => {
            println!("\nResults: {} rows", table.row_count());
            println!("  Columns: {}", table.columns().join(", "));
        }
        None => println!("\nNo result table was written"),
    }
    Ok(())
}

fn cmd_runs(model: ModelFamily, root: &Path) -> AppResult<()> {
    let layout = ArtifactLayout::new(root);
    let runs = layout.list_runs(model)?;

    if runs.is_empty() {
        println!("No runs found for model: {}", model);
    } else {
        println!("Runs for model '{}':", model);
        for manifest in runs {
            println!(
                "  {} ({}, {} devices, {})",
                manifest.folder_name, manifest.network, manifest.device_count, manifest.timestamp
            );
        }
    }
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(80));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    let spinner = ['|', '/', '-', '\\'];
    let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
    let mut line = format!(
        "\r{} {}  elapsed={:.2}s",
        spinner[spin_idx],
        event.stage.label(),
        event.elapsed_wall_s
    );
    if let RunStage::Simulating { iteration, of } = event.stage {
        line.push_str(&format!("  iteration={}/{}", iteration, of));
    }
    print!("{}", line);
    let _ = io::stdout().flush();
}
