//! Solvers module - interchangeable backends for the implicit Crank-Nicolson solve.

mod traits;
mod thomas;
mod dense;

pub use traits::{LinearSolver, SolveError, SolverBackend};
pub use thomas::ThomasSolver;
pub use dense::DenseLuSolver;

use num_complex::Complex64;
use crate::operators::TridiagonalMatrix;

/// Factor `matrix` with the requested backend.
pub fn prepare_solver(
    backend: SolverBackend,
    matrix: &TridiagonalMatrix<Complex64>,
) -> Result<Box<dyn LinearSolver>, SolveError> {
    Ok(match backend {
        SolverBackend::Tridiagonal => Box::new(ThomasSolver::factor(matrix)?),
        SolverBackend::DenseLu => Box::new(DenseLuSolver::factor(matrix)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;
    use rand_distr::{Distribution, Normal};

    #[test]
    fn test_backends_agree_on_random_systems() {
        let mut rng = rand::thread_rng();
        let dist = Normal::new(0.0, 1.0).unwrap();
        let n = 40;

        // diagonally dominant so the unpivoted banded solve is well posed
        let lower: Vec<Complex64> = (0..n - 1)
            .map(|_| Complex64::new(dist.sample(&mut rng), dist.sample(&mut rng)))
            .collect();
        let upper: Vec<Complex64> = (0..n - 1)
            .map(|_| Complex64::new(dist.sample(&mut rng), dist.sample(&mut rng)))
            .collect();
        let diagonal: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(10.0 + dist.sample(&mut rng), dist.sample(&mut rng)))
            .collect();
        let m = TridiagonalMatrix::from_bands(lower, diagonal, upper);

        let thomas = prepare_solver(SolverBackend::Tridiagonal, &m).unwrap();
        let dense = prepare_solver(SolverBackend::DenseLu, &m).unwrap();
        assert_eq!(thomas.dim(), n);
        assert_eq!(dense.dim(), n);

        for _ in 0..5 {
            let rhs = DVector::from_fn(n, |_, _| Complex64::new(dist.sample(&mut rng), dist.sample(&mut rng)));
            let x1 = thomas.solve(&rhs).unwrap();
            let x2 = dense.solve(&rhs).unwrap();
            assert!((x1 - x2).norm() < 1e-10);
        }
    }
}
