//! Discretized Hamiltonian H = T + V on a uniform 1D grid.
//!
//! The kinetic term uses the three-point Laplacian
//!     d²ψ/dx² ≈ (ψ_{i-1} - 2ψ_i + ψ_{i+1}) / dr²
//! scaled by -ħ²/(2m). Rows 0 and N-1 simply lose their outer neighbour,
//! which pins ψ to zero just outside the grid.

use approx::relative_eq;

use super::tridiagonal::TridiagonalMatrix;

/// Uniform grid on [0, L], endpoints included.
#[derive(Clone, Debug)]
pub struct Grid {
    pub points: Vec<f64>,
    /// Spacing dr = L / (N - 1)
    pub spacing: f64,
    pub length: f64,
}

impl Grid {
    pub fn linspace(length: f64, n_points: usize) -> Self {
        let spacing = length / (n_points as f64 - 1.0);
        let points = (0..n_points).map(|i| i as f64 * spacing).collect();
        Self { points, spacing, length }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * self.length
    }
}

/// Static potential sampled on the grid.
#[derive(Clone, Debug)]
pub struct Potential {
    pub values: Vec<f64>,
}

impl Potential {
    pub fn zeros(n_points: usize) -> Self {
        Self { values: vec![0.0; n_points] }
    }

    /// Rectangular barrier of the given height on indices N/4 .. 3N/4.
    pub fn rectangular_barrier(n_points: usize, height: f64) -> Self {
        let mut values = vec![0.0; n_points];
        for v in &mut values[Self::barrier_range(n_points)] {
            *v = height;
        }
        Self { values }
    }

    /// Index range covered by the barrier (end exclusive).
    pub fn barrier_range(n_points: usize) -> std::ops::Range<usize> {
        n_points / 4..3 * n_points / 4
    }
}

/// Kinetic operator -ħ²/(2m) ∇² as a tridiagonal matrix.
pub fn kinetic_operator(n_points: usize, dr: f64, mass: f64, hbar: f64) -> TridiagonalMatrix<f64> {
    let coeff = kinetic_coefficient(dr, mass, hbar);
    &TridiagonalMatrix::toeplitz(n_points, 1.0, -2.0) * coeff
}

/// Prefactor -ħ²/(2 m dr²) applied to the (1, -2, 1) stencil.
pub fn kinetic_coefficient(dr: f64, mass: f64, hbar: f64) -> f64 {
    -hbar * hbar / (2.0 * mass * dr * dr)
}

pub fn potential_operator(potential: &Potential) -> TridiagonalMatrix<f64> {
    TridiagonalMatrix::from_diagonal(potential.values.clone())
}

/// Total Hamiltonian, built once and never modified.
#[derive(Clone, Debug)]
pub struct Hamiltonian {
    operator: TridiagonalMatrix<f64>,
}

impl Hamiltonian {
    pub fn new(grid: &Grid, potential: &Potential, mass: f64, hbar: f64) -> Self {
        assert_eq!(grid.len(), potential.values.len(), "potential is not aligned with the grid");
        let kinetic = kinetic_operator(grid.len(), grid.spacing, mass, hbar);
        let operator = &kinetic + &potential_operator(potential);
        Self { operator }
    }

    pub fn operator(&self) -> &TridiagonalMatrix<f64> {
        &self.operator
    }

    pub fn dim(&self) -> usize {
        self.operator.dim()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.operator.get(i, j)
    }

    /// H[i][j] == H[j][i] up to `epsilon` relative tolerance.
    pub fn is_symmetric(&self, epsilon: f64) -> bool {
        self.operator
            .lower()
            .iter()
            .zip(self.operator.upper())
            .all(|(l, u)| relative_eq!(*l, *u, epsilon = epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_linspace() {
        let grid = Grid::linspace(10.0, 1000);
        assert_eq!(grid.len(), 1000);
        assert_relative_eq!(grid.spacing, 10.0 / 999.0, epsilon = 1e-15);
        assert_relative_eq!(grid.points[0], 0.0);
        assert_relative_eq!(grid.points[999], 10.0, epsilon = 1e-12);
        assert_relative_eq!(grid.midpoint(), 5.0);
    }

    #[test]
    fn test_barrier_placement() {
        let v = Potential::rectangular_barrier(1000, 1.0);
        assert_eq!(Potential::barrier_range(1000), 250..750);
        assert_eq!(v.values[249], 0.0);
        assert_eq!(v.values[250], 1.0);
        assert_eq!(v.values[749], 1.0);
        assert_eq!(v.values[750], 0.0);
        assert_relative_eq!(v.values.iter().sum::<f64>(), 500.0);
    }

    #[test]
    fn test_kinetic_coefficients() {
        let dr = 0.1;
        let t = kinetic_operator(5, dr, 0.5, 1.0);
        let c = -1.0 / (2.0 * 0.5 * dr * dr);
        for i in 0..5 {
            assert_relative_eq!(t.get(i, i), -2.0 * c, epsilon = 1e-12);
        }
        for i in 0..4 {
            assert_relative_eq!(t.get(i, i + 1), c, epsilon = 1e-12);
            assert_relative_eq!(t.get(i + 1, i), c, epsilon = 1e-12);
        }
        // truncated at the edges, no wraparound
        assert_eq!(t.get(0, 4), 0.0);
        assert_eq!(t.get(4, 0), 0.0);
    }

    #[test]
    fn test_hamiltonian_symmetric() {
        let grid = Grid::linspace(10.0, 64);
        let potential = Potential::rectangular_barrier(64, 1.0);
        let h = Hamiltonian::new(&grid, &potential, 0.001, 1.0);
        assert!(h.is_symmetric(1e-12));

        let dense = h.operator().to_dense();
        for i in 0..64 {
            for j in 0..64 {
                assert_eq!(dense[(i, j)], dense[(j, i)]);
            }
        }
    }

    #[test]
    fn test_hamiltonian_diagonal_includes_potential() {
        let grid = Grid::linspace(10.0, 40);
        let potential = Potential::rectangular_barrier(40, 3.0);
        let h = Hamiltonian::new(&grid, &potential, 1.0, 1.0);
        let c = kinetic_coefficient(grid.spacing, 1.0, 1.0);
        assert_relative_eq!(h.get(0, 0), -2.0 * c, epsilon = 1e-12);
        assert_relative_eq!(h.get(20, 20), -2.0 * c + 3.0, epsilon = 1e-12);
        assert_relative_eq!(h.get(20, 21), c, epsilon = 1e-12);
    }
}
