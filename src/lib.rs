//! Rust TDSE - time-dependent Schrödinger equation in one dimension
//!
//! This crate propagates a Gaussian wave packet through a rectangular barrier
//! with the Crank-Nicolson scheme on a finite-difference grid, and collects
//! the probability density at regular intervals for plotting.

pub mod operators;
pub mod solvers;
pub mod evolution;
pub mod io;
pub mod simulation;

// Re-export commonly used types at crate root
pub use operators::{Grid, Potential, Hamiltonian, TridiagonalMatrix};
pub use solvers::{LinearSolver, SolveError, SolverBackend, ThomasSolver, DenseLuSolver};
pub use evolution::{CrankNicolson, Snapshot, SnapshotRecorder, StepObserver};
pub use io::{read_params, SimulationParams, InitialNormalization, show_snapshots};
pub use simulation::{Simulation, SimulationError, SimulationResults};
