//! Thomas algorithm: LU factorization specialised to tridiagonal systems.
//!
//! For A with sub-diagonal a, diagonal b and super-diagonal c,
//!     w_0 = b_0
//!     l_{i-1} = a_{i-1} / w_{i-1},  w_i = b_i - l_{i-1} c_{i-1}
//! gives A = L U with L unit lower bidiagonal (multipliers l) and U upper
//! bidiagonal (pivots w, super-diagonal c). No pivoting is done, so the
//! factorization is only reliable for diagonally dominant matrices, which the
//! Crank-Nicolson operator I + iαH always is.

use nalgebra::DVector;
use num_complex::Complex64;

use crate::operators::TridiagonalMatrix;
use super::traits::{LinearSolver, SolveError};

#[derive(Clone, Debug)]
pub struct ThomasSolver {
    multipliers: Vec<Complex64>,
    pivots: Vec<Complex64>,
    upper: Vec<Complex64>,
}

impl ThomasSolver {
    /// Factor `matrix` once; every subsequent solve is two O(N) sweeps.
    pub fn factor(matrix: &TridiagonalMatrix<Complex64>) -> Result<Self, SolveError> {
        let n = matrix.dim();
        let a = matrix.lower();
        let b = matrix.diagonal();
        let c = matrix.upper();

        let mut multipliers = Vec::with_capacity(n.saturating_sub(1));
        let mut pivots = Vec::with_capacity(n);

        let w0 = b[0];
        check_pivot(w0, 0)?;
        pivots.push(w0);

        for i in 1..n {
            let l = a[i - 1] / pivots[i - 1];
            let w = b[i] - l * c[i - 1];
            check_pivot(w, i)?;
            multipliers.push(l);
            pivots.push(w);
        }

        Ok(Self { multipliers, pivots, upper: c.to_vec() })
    }
}

fn check_pivot(w: Complex64, row: usize) -> Result<(), SolveError> {
    if w.norm() < f64::MIN_POSITIVE || !w.is_finite() {
        Err(SolveError::ZeroPivot { row })
    } else {
        Ok(())
    }
}

impl LinearSolver for ThomasSolver {
    fn dim(&self) -> usize {
        self.pivots.len()
    }

    fn solve(&self, rhs: &DVector<Complex64>) -> Result<DVector<Complex64>, SolveError> {
        self.check_dim(rhs)?;
        let n = self.dim();
        let mut x = rhs.clone();

        // forward: L y = b
        for i in 1..n {
            let prev = x[i - 1];
            x[i] -= self.multipliers[i - 1] * prev;
        }

        // backward: U x = y
        x[n - 1] /= self.pivots[n - 1];
        for i in (0..n - 1).rev() {
            let next = x[i + 1];
            x[i] = (x[i] - self.upper[i] * next) / self.pivots[i];
        }

        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_small_system() {
        // [2 1 0; 1 2 1; 0 1 2] x = [4, 8, 8] => x = [1, 2, 3]
        let m = TridiagonalMatrix::toeplitz(3, Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0));
        let solver = ThomasSolver::factor(&m).unwrap();
        let rhs = DVector::from_vec(vec![
            Complex64::new(4.0, 0.0),
            Complex64::new(8.0, 0.0),
            Complex64::new(8.0, 0.0),
        ]);
        let x = solver.solve(&rhs).unwrap();
        assert_relative_eq!(x[0].re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1].re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[2].re, 3.0, epsilon = 1e-12);
        assert!(x.iter().all(|z| z.im.abs() < 1e-12));
    }

    #[test]
    fn test_residual_complex_system() {
        let n = 50;
        let m = TridiagonalMatrix::toeplitz(n, Complex64::new(0.0, -3.0), Complex64::new(1.0, 6.5));
        let solver = ThomasSolver::factor(&m).unwrap();
        let rhs = DVector::from_fn(n, |i, _| Complex64::new((i as f64).sin(), (i as f64 * 0.3).cos()));
        let x = solver.solve(&rhs).unwrap();
        let residual = m.mul_vec(&x) - &rhs;
        assert!(residual.norm() < 1e-10);
    }

    #[test]
    fn test_single_row() {
        let m = TridiagonalMatrix::from_diagonal(vec![Complex64::new(0.0, 2.0)]);
        let solver = ThomasSolver::factor(&m).unwrap();
        let x = solver.solve(&DVector::from_element(1, Complex64::new(4.0, 0.0))).unwrap();
        assert_relative_eq!(x[0].im, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_pivot_reported() {
        let one = Complex64::new(1.0, 0.0);
        // [[1, 1], [1, 1]] eliminates to a zero second pivot
        let m = TridiagonalMatrix::from_bands(vec![one], vec![one, one], vec![one]);
        assert_eq!(ThomasSolver::factor(&m).unwrap_err(), SolveError::ZeroPivot { row: 1 });
    }

    #[test]
    fn test_dimension_mismatch() {
        let m = TridiagonalMatrix::<Complex64>::identity(4);
        let solver = ThomasSolver::factor(&m).unwrap();
        let err = solver.solve(&DVector::zeros(3)).unwrap_err();
        assert_eq!(err, SolveError::DimensionMismatch { expected: 4, found: 3 });
    }
}
