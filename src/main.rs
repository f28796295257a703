use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use rust_tdse::{read_params, show_snapshots, Simulation, SimulationParams, SolverBackend};

#[derive(Parser, Debug)]
#[command(version, about = "Crank-Nicolson propagation of a wave packet through a rectangular barrier", long_about = None)]
struct Args {
    /// YAML parameter file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Override the number of time steps
    #[arg(long)]
    steps: Option<usize>,

    /// Override the linear solver backend
    #[arg(long, value_enum)]
    solver: Option<SolverBackend>,

    /// Override the barrier height (0 for a free particle)
    #[arg(long)]
    barrier_height: Option<f64>,

    /// Skip the plot window and only log the snapshot summary
    #[arg(long)]
    no_plot: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut params = match &args.config {
        Some(path) => read_params(path)?,
        None => SimulationParams::default(),
    };
    if let Some(steps) = args.steps {
        params.n_steps = steps;
    }
    if let Some(solver) = args.solver {
        params.solver = solver;
    }
    if let Some(height) = args.barrier_height {
        params.barrier_height = height;
    }

    info!(?params, "starting simulation");
    let simulation = Simulation::new(params).context("Set up simulation")?;
    let results = simulation.run().context("Run Crank-Nicolson evolution")?;
    simulation.log_summary(&results.snapshots);

    if !args.no_plot {
        show_snapshots(&simulation.grid().points, &results.snapshots);
    }
    Ok(())
}
