//! Observation hook for the time-stepping loop.

use nalgebra::DVector;
use num_complex::Complex64;

/// Receives the state once before the first step and again after every
/// renormalized step. Observers only borrow ψ; the loop keeps ownership.
pub trait StepObserver {
    fn observe(&mut self, step: usize, time: f64, psi: &DVector<Complex64>);
}

impl<F> StepObserver for F
where
    F: FnMut(usize, f64, &DVector<Complex64>),
{
    fn observe(&mut self, step: usize, time: f64, psi: &DVector<Complex64>) {
        self(step, time, psi)
    }
}
