//! Free-particle spreading compared against the analytic Gaussian width
//!
//! Run with: cargo run --release --example free_packet
//!
//! With V = 0 and ψ₀ = exp(-x²/2), |ψ|² stays Gaussian with
//!     σ(t)² = ½ (1 + (ħt/m)²)

use rust_tdse::{Simulation, SimulationParams};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let params = SimulationParams {
        mass: 1.0,
        n_points: 400,
        dt: 0.005,
        n_steps: 400,
        sample_interval: 40,
        barrier_height: 0.0,
        ..Default::default()
    };

    println!("=== Free Gaussian packet ===");
    println!("m = {}, ħ = {}, N = {}, dt = {}", params.mass, params.hbar, params.n_points, params.dt);
    println!();

    let simulation = Simulation::new(params)?;
    let results = simulation.run()?;
    let dr = simulation.grid().spacing;

    println!("{:>8} {:>12} {:>12} {:>12}", "t", "peak", "width", "analytic");
    for s in &results.snapshots {
        let (_, peak) = s.peak();
        let t = s.time * params.hbar / params.mass;
        let analytic = (0.5 * (1.0 + t * t)).sqrt();
        println!(
            "{:>8.2} {:>12.6} {:>12.6} {:>12.6}",
            s.time,
            peak,
            s.width(&simulation.grid().points, dr),
            analytic
        );
    }
    Ok(())
}
