//! End-to-end driver: parameters -> grid, barrier, Hamiltonian -> Crank-Nicolson run.

use std::fmt;

use nalgebra::DVector;
use num_complex::Complex64;
use tracing::{debug, info};

use crate::evolution::{gaussian_packet, probability_norm, CrankNicolson, Snapshot, SnapshotRecorder, StepObserver};
use crate::io::SimulationParams;
use crate::operators::{kinetic_coefficient, Grid, Hamiltonian, Potential};
use crate::solvers::SolveError;

#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    InvalidParams(String),
    Solve(SolveError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidParams(msg) => write!(f, "invalid simulation parameters: {}", msg),
            SimulationError::Solve(err) => write!(f, "linear solve failed: {}", err),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Solve(err) => Some(err),
            SimulationError::InvalidParams(_) => None,
        }
    }
}

impl From<SolveError> for SimulationError {
    fn from(err: SolveError) -> Self {
        SimulationError::Solve(err)
    }
}

/// Output of a completed run.
pub struct SimulationResults {
    pub snapshots: Vec<Snapshot>,
    pub final_state: DVector<Complex64>,
}

/// A wave packet in a box with a rectangular barrier, ready to propagate.
pub struct Simulation {
    params: SimulationParams,
    grid: Grid,
    potential: Potential,
    hamiltonian: Hamiltonian,
    propagator: CrankNicolson,
}

impl Simulation {
    pub fn new(params: SimulationParams) -> Result<Self, SimulationError> {
        params.validate().map_err(SimulationError::InvalidParams)?;

        let grid = Grid::linspace(params.length, params.n_points);
        let potential = Potential::rectangular_barrier(params.n_points, params.barrier_height);
        let hamiltonian = Hamiltonian::new(&grid, &potential, params.mass, params.hbar);
        let propagator = CrankNicolson::new(&hamiltonian, params.dt, params.hbar, grid.spacing, params.solver)?;

        info!(
            n_points = params.n_points,
            dr = grid.spacing,
            kinetic_coefficient = kinetic_coefficient(grid.spacing, params.mass, params.hbar),
            barrier_height = params.barrier_height,
            solver = ?params.solver,
            "built Hamiltonian and Crank-Nicolson operators"
        );

        Ok(Self { params, grid, potential, hamiltonian, propagator })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn potential(&self) -> &Potential {
        &self.potential
    }

    pub fn hamiltonian(&self) -> &Hamiltonian {
        &self.hamiltonian
    }

    pub fn initial_state(&self) -> DVector<Complex64> {
        gaussian_packet(&self.grid, self.params.initial_normalization)
    }

    /// Run all steps, sampling every `sample_interval` steps.
    pub fn run(&self) -> Result<SimulationResults, SimulationError> {
        let mut recorder = SnapshotRecorder::new(self.params.sample_interval);
        let final_state = self.run_with(&mut recorder)?;
        let snapshots = recorder.into_snapshots();
        info!(n_snapshots = snapshots.len(), n_steps = self.params.n_steps, "evolution finished");
        Ok(SimulationResults { snapshots, final_state })
    }

    /// Run all steps, handing every state to `observer`.
    pub fn run_with<O: StepObserver + ?Sized>(
        &self,
        observer: &mut O,
    ) -> Result<DVector<Complex64>, SimulationError> {
        let interval = self.params.sample_interval;
        let dr = self.grid.spacing;
        let mut progress = |step: usize, time: f64, psi: &DVector<Complex64>| {
            if step % interval == 0 {
                debug!(step, time, norm = probability_norm(psi, dr), "sampled");
            }
            observer.observe(step, time, psi);
        };
        let psi = self.propagator.evolve(self.initial_state(), self.params.n_steps, &mut progress)?;
        Ok(psi)
    }

    /// Log norm, centroid, width and peak for every snapshot.
    pub fn log_summary(&self, snapshots: &[Snapshot]) {
        let dr = self.grid.spacing;
        let barrier = Potential::barrier_range(self.grid.len());
        for s in snapshots {
            let (peak_index, peak) = s.peak();
            info!(
                time = %format!("{:.2}", s.time),
                norm = s.total_probability(dr),
                mean_x = s.mean_position(&self.grid.points, dr),
                width = s.width(&self.grid.points, dr),
                peak,
                peak_x = self.grid.points[peak_index],
                barrier_probability = s.probability_in(barrier.clone(), dr),
                "snapshot"
            );
        }
    }
}
