//! Gaussian packet released inside a rectangular barrier
//!
//! Run with: cargo run --release --example barrier_packet
//!
//! Uses the reference parameters (m = 0.001, ħ = 1, L = 10, N = 1000,
//! dt = 0.001, 1000 steps) and opens the density plot in the browser.

use rust_tdse::{show_snapshots, Potential, Simulation, SimulationParams};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let params = SimulationParams::default();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║     Crank-Nicolson Evolution - Rectangular Barrier           ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Grid points N:      {}", params.n_points);
    println!("Domain length L:    {:.2}", params.length);
    println!("Time step dt:       {:.4}", params.dt);
    println!("Steps:              {}", params.n_steps);
    println!("Barrier height V0:  {:.2}", params.barrier_height);
    println!();

    let simulation = Simulation::new(params)?;
    let results = simulation.run()?;

    let dr = simulation.grid().spacing;
    let points = &simulation.grid().points;
    let barrier = Potential::barrier_range(points.len());
    println!("{:>8} {:>12} {:>12} {:>12} {:>14}", "t", "norm", "<x>", "width", "P(barrier)");
    for s in &results.snapshots {
        println!(
            "{:>8.2} {:>12.6} {:>12.6} {:>12.6} {:>14.6}",
            s.time,
            s.total_probability(dr),
            s.mean_position(points, dr),
            s.width(points, dr),
            s.probability_in(barrier.clone(), dr),
        );
    }

    show_snapshots(points, &results.snapshots);
    Ok(())
}
