//! Sampled probability densities and the observables computed from them.

use std::ops::Range;

use nalgebra::DVector;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::traits::StepObserver;

/// |ψ(x)|² at one sampled time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: f64,
    pub density: Vec<f64>,
}

impl Snapshot {
    pub fn from_state(time: f64, psi: &DVector<Complex64>) -> Self {
        Self { time, density: psi.iter().map(|z| z.norm_sqr()).collect() }
    }

    /// Σ|ψ|²·dr
    pub fn total_probability(&self, dr: f64) -> f64 {
        self.density.iter().sum::<f64>() * dr
    }

    /// Probability on the index range `range`.
    pub fn probability_in(&self, range: Range<usize>, dr: f64) -> f64 {
        self.density[range].iter().sum::<f64>() * dr
    }

    /// <x> = Σ x|ψ|²·dr / Σ|ψ|²·dr
    pub fn mean_position(&self, grid: &[f64], dr: f64) -> f64 {
        let first = self.moment(grid, dr, |x| x);
        first / self.total_probability(dr)
    }

    /// sqrt(<x²> - <x>²)
    pub fn width(&self, grid: &[f64], dr: f64) -> f64 {
        let norm = self.total_probability(dr);
        let mean = self.moment(grid, dr, |x| x) / norm;
        let second = self.moment(grid, dr, |x| x * x) / norm;
        (second - mean * mean).max(0.0).sqrt()
    }

    /// Largest density value and the index where it occurs.
    pub fn peak(&self) -> (usize, f64) {
        self.density
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, p)| if p > best.1 { (i, p) } else { best })
    }

    fn moment<F: Fn(f64) -> f64>(&self, grid: &[f64], dr: f64, f: F) -> f64 {
        grid.iter().zip(&self.density).map(|(&x, &p)| f(x) * p).sum::<f64>() * dr
    }
}

/// Collects a snapshot every `interval` steps, starting with step 0.
#[derive(Clone, Debug)]
pub struct SnapshotRecorder {
    interval: usize,
    snapshots: Vec<Snapshot>,
}

impl SnapshotRecorder {
    pub fn new(interval: usize) -> Self {
        Self { interval: interval.max(1), snapshots: Vec::new() }
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl StepObserver for SnapshotRecorder {
    fn observe(&mut self, step: usize, time: f64, psi: &DVector<Complex64>) {
        if step % self.interval == 0 {
            self.snapshots.push(Snapshot::from_state(time, psi));
        }
    }
}
