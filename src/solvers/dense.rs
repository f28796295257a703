//! Dense LU backend on top of nalgebra.

use nalgebra::{linalg::LU, DVector, Dyn};
use num_complex::Complex64;

use crate::operators::TridiagonalMatrix;
use super::traits::{LinearSolver, SolveError};

/// Partial-pivot LU of the full matrix. Quadratic per solve, so mostly useful
/// for small grids and for checking the banded solver.
pub struct DenseLuSolver {
    lu: LU<Complex64, Dyn, Dyn>,
    dim: usize,
}

impl DenseLuSolver {
    pub fn factor(matrix: &TridiagonalMatrix<Complex64>) -> Result<Self, SolveError> {
        let dim = matrix.dim();
        let lu = matrix.to_dense().lu();
        if !lu.is_invertible() {
            return Err(SolveError::Singular);
        }
        Ok(Self { lu, dim })
    }
}

impl LinearSolver for DenseLuSolver {
    fn dim(&self) -> usize {
        self.dim
    }

    fn solve(&self, rhs: &DVector<Complex64>) -> Result<DVector<Complex64>, SolveError> {
        self.check_dim(rhs)?;
        self.lu.solve(rhs).ok_or(SolveError::Singular)
    }
}
