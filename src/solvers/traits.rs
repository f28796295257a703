//! Traits and error types shared by the linear-system backends.

use std::fmt;

use clap::ValueEnum;
use nalgebra::DVector;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A factored operator that can solve `A x = b` repeatedly.
pub trait LinearSolver {
    /// Dimension of the square system.
    fn dim(&self) -> usize;

    fn solve(&self, rhs: &DVector<Complex64>) -> Result<DVector<Complex64>, SolveError>;

    fn check_dim(&self, rhs: &DVector<Complex64>) -> Result<(), SolveError> {
        if rhs.len() == self.dim() {
            Ok(())
        } else {
            Err(SolveError::DimensionMismatch { expected: self.dim(), found: rhs.len() })
        }
    }
}

/// Which backend factors the implicit Crank-Nicolson operator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SolverBackend {
    /// Banded LU (Thomas algorithm), O(N) per solve
    #[default]
    Tridiagonal,
    /// Dense LU with partial pivoting, O(N²) per solve
    DenseLu,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// Elimination hit a zero pivot at this row.
    ZeroPivot { row: usize },
    /// The factorization reports a non-invertible matrix.
    Singular,
    DimensionMismatch { expected: usize, found: usize },
    /// The solved state has zero or non-finite norm and cannot be renormalized.
    VanishingNorm,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::ZeroPivot { row } => write!(f, "zero pivot at row {} during tridiagonal factorization", row),
            SolveError::Singular => write!(f, "matrix is singular"),
            SolveError::DimensionMismatch { expected, found } => {
                write!(f, "right-hand side has length {}, expected {}", found, expected)
            }
            SolveError::VanishingNorm => write!(f, "wavefunction norm vanished or became non-finite"),
        }
    }
}

impl std::error::Error for SolveError {}
