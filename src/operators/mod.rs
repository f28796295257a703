//! Operators module - banded matrices and the discretized Hamiltonian.

mod tridiagonal;
mod hamiltonian;

pub use tridiagonal::TridiagonalMatrix;
pub use hamiltonian::{Grid, Potential, Hamiltonian, kinetic_operator, kinetic_coefficient, potential_operator};
