//! Simulation parameters and YAML loading.
//!
//! Defaults reproduce the reference run: m = 0.001, ħ = 1, L = 10, N = 1000,
//! dt = 0.001, 1000 steps sampled every 100, barrier height 1.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::solvers::SolverBackend;

/// How the initial Gaussian is scaled before the first step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialNormalization {
    /// Σ|ψ|²·dr = 1, the same convention the step loop enforces.
    #[default]
    Probability,
    /// Σ|ψ|² = 1 (plain Euclidean norm). Off from the loop convention by sqrt(dr).
    Euclidean,
}

/// Immutable parameters shared by the Hamiltonian builder and the evolver.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub mass: f64,
    pub hbar: f64,
    /// Domain length L; the grid spans [0, L]
    pub length: f64,
    pub n_points: usize,
    pub dt: f64,
    pub n_steps: usize,
    /// Record a snapshot every `sample_interval` steps
    pub sample_interval: usize,
    /// Height of the rectangular barrier on N/4..3N/4 (0 for a free particle)
    pub barrier_height: f64,
    pub initial_normalization: InitialNormalization,
    pub solver: SolverBackend,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            mass: 0.001,
            hbar: 1.0,
            length: 10.0,
            n_points: 1000,
            dt: 0.001,
            n_steps: 1000,
            sample_interval: 100,
            barrier_height: 1.0,
            initial_normalization: InitialNormalization::Probability,
            solver: SolverBackend::Tridiagonal,
        }
    }
}

impl SimulationParams {
    /// Grid spacing dr = L / (N - 1).
    pub fn spacing(&self) -> f64 {
        self.length / (self.n_points as f64 - 1.0)
    }

    /// Reject parameter sets the discretization cannot handle.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [("mass", self.mass), ("hbar", self.hbar), ("length", self.length), ("dt", self.dt)];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be finite and positive, got {}", name, value));
            }
        }
        if self.n_points < 3 {
            return Err(format!("n_points must be at least 3, got {}", self.n_points));
        }
        if self.sample_interval == 0 {
            return Err("sample_interval must be at least 1".to_string());
        }
        if !self.barrier_height.is_finite() {
            return Err(format!("barrier_height must be finite, got {}", self.barrier_height));
        }
        Ok(())
    }
}

/// Read simulation parameters from a YAML file. Missing keys keep their defaults.
pub fn read_params<P: AsRef<Path>>(filename: P) -> Result<SimulationParams> {
    let path = filename.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Open parameter file {}", path.display()))?;
    let reader = std::io::BufReader::new(file);
    let params: SimulationParams = serde_yaml::from_reader(reader)
        .with_context(|| format!("Parse parameter file {}", path.display()))?;
    Ok(params)
}

/// Parse parameters from an in-memory YAML document.
pub fn parse_params(yaml: &str) -> Result<SimulationParams> {
    serde_yaml::from_str(yaml).context("Parse simulation parameters")
}

// example of yaml file
// mass: 0.001
// hbar: 1.0
// length: 10.0
// n_points: 1000
// dt: 0.001
// n_steps: 1000
// sample_interval: 100
// barrier_height: 1.0
// initial_normalization: probability
// solver: tridiagonal
