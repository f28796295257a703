//! Banded storage for the three-point finite-difference operators.
//!
//! Only the sub-, main and super-diagonals are kept. Everything outside the
//! band is an implicit zero, which is also what truncates the Laplacian at the
//! grid edges.

use std::ops::{Add, Mul, Sub};

use nalgebra::{ComplexField, DMatrix, DVector};

/// Square tridiagonal matrix stored as its three bands.
#[derive(Clone, Debug, PartialEq)]
pub struct TridiagonalMatrix<T: ComplexField + Copy> {
    lower: Vec<T>,
    diagonal: Vec<T>,
    upper: Vec<T>,
}

impl<T: ComplexField + Copy> TridiagonalMatrix<T> {
    /// Build from explicit bands. `lower[i]` is element `(i + 1, i)` and
    /// `upper[i]` is element `(i, i + 1)`.
    ///
    /// Panics if the band lengths are inconsistent.
    pub fn from_bands(lower: Vec<T>, diagonal: Vec<T>, upper: Vec<T>) -> Self {
        let n = diagonal.len();
        assert!(n > 0, "tridiagonal matrix must have at least one row");
        assert_eq!(lower.len(), n - 1, "sub-diagonal length mismatch");
        assert_eq!(upper.len(), n - 1, "super-diagonal length mismatch");
        Self { lower, diagonal, upper }
    }

    /// Constant-coefficient band: `off` on both off-diagonals, `main` on the diagonal.
    pub fn toeplitz(n: usize, off: T, main: T) -> Self {
        Self::from_bands(vec![off; n - 1], vec![main; n], vec![off; n - 1])
    }

    pub fn from_diagonal(diagonal: Vec<T>) -> Self {
        let n = diagonal.len();
        Self::from_bands(vec![nalgebra::zero(); n - 1], diagonal, vec![nalgebra::zero(); n - 1])
    }

    pub fn identity(n: usize) -> Self {
        Self::from_diagonal(vec![nalgebra::one(); n])
    }

    pub fn dim(&self) -> usize {
        self.diagonal.len()
    }

    pub fn lower(&self) -> &[T] {
        &self.lower
    }

    pub fn diagonal(&self) -> &[T] {
        &self.diagonal
    }

    pub fn upper(&self) -> &[T] {
        &self.upper
    }

    /// Element `(i, j)`; zero outside the band.
    pub fn get(&self, i: usize, j: usize) -> T {
        let n = self.dim();
        assert!(i < n && j < n, "index ({}, {}) out of bounds for {}x{} matrix", i, j, n, n);
        if i == j {
            self.diagonal[i]
        } else if i == j + 1 {
            self.lower[j]
        } else if j == i + 1 {
            self.upper[i]
        } else {
            nalgebra::zero()
        }
    }

    /// Apply `f` to every stored band entry.
    pub fn map<U, F>(&self, f: F) -> TridiagonalMatrix<U>
    where
        U: ComplexField + Copy,
        F: Fn(T) -> U,
    {
        TridiagonalMatrix {
            lower: self.lower.iter().map(|&v| f(v)).collect(),
            diagonal: self.diagonal.iter().map(|&v| f(v)).collect(),
            upper: self.upper.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Matrix-vector product `self * v` in O(n).
    pub fn mul_vec(&self, v: &DVector<T>) -> DVector<T> {
        let n = self.dim();
        assert_eq!(v.len(), n, "vector length does not match matrix dimension");
        DVector::from_fn(n, |i, _| {
            let mut acc = self.diagonal[i] * v[i];
            if i > 0 {
                acc += self.lower[i - 1] * v[i - 1];
            }
            if i + 1 < n {
                acc += self.upper[i] * v[i + 1];
            }
            acc
        })
    }

    /// Dense copy, for the dense backends and for inspection.
    pub fn to_dense(&self) -> DMatrix<T> {
        let n = self.dim();
        let mut m = DMatrix::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = self.diagonal[i];
            if i + 1 < n {
                m[(i + 1, i)] = self.lower[i];
                m[(i, i + 1)] = self.upper[i];
            }
        }
        m
    }

    fn zip_with<F: Fn(T, T) -> T>(&self, other: &Self, f: F) -> Self {
        assert_eq!(self.dim(), other.dim(), "matrix dimensions differ");
        let zip = |a: &[T], b: &[T]| -> Vec<T> { a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect() };
        Self {
            lower: zip(&self.lower, &other.lower),
            diagonal: zip(&self.diagonal, &other.diagonal),
            upper: zip(&self.upper, &other.upper),
        }
    }
}

impl<'a, T: ComplexField + Copy> Add<&'a TridiagonalMatrix<T>> for &'a TridiagonalMatrix<T> {
    type Output = TridiagonalMatrix<T>;

    fn add(self, rhs: &'a TridiagonalMatrix<T>) -> TridiagonalMatrix<T> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<'a, T: ComplexField + Copy> Sub<&'a TridiagonalMatrix<T>> for &'a TridiagonalMatrix<T> {
    type Output = TridiagonalMatrix<T>;

    fn sub(self, rhs: &'a TridiagonalMatrix<T>) -> TridiagonalMatrix<T> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: ComplexField + Copy> Mul<T> for &TridiagonalMatrix<T> {
    type Output = TridiagonalMatrix<T>;

    fn mul(self, rhs: T) -> TridiagonalMatrix<T> {
        self.map(|v| v * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;

    fn sample() -> TridiagonalMatrix<f64> {
        TridiagonalMatrix::from_bands(vec![1.0, 2.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0])
    }

    #[test]
    fn test_get_matches_dense() {
        let m = sample();
        let dense = m.to_dense();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), dense[(i, j)]);
            }
        }
        assert_eq!(m.get(1, 0), 1.0);
        assert_eq!(m.get(0, 1), 7.0);
        assert_eq!(m.get(0, 2), 0.0);
    }

    #[test]
    fn test_mul_vec_matches_dense() {
        let m = sample();
        let v = DVector::from_vec(vec![1.0, -2.0, 0.5]);
        let banded = m.mul_vec(&v);
        let dense = m.to_dense() * &v;
        for i in 0..3 {
            assert_relative_eq!(banded[i], dense[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_arithmetic() {
        let m = sample();
        let id = TridiagonalMatrix::identity(3);
        let sum = &m + &id;
        let diff = &sum - &m;
        assert_eq!(diff, id);
        let scaled = &m * 2.0;
        assert_eq!(scaled.diagonal(), &[8.0, 10.0, 12.0]);
        assert_eq!(scaled.upper(), &[14.0, 16.0]);
    }

    #[test]
    fn test_map_to_complex() {
        let m = sample();
        let c = m.map(|v| Complex64::new(0.0, v));
        assert_eq!(c.get(2, 1), Complex64::new(0.0, 2.0));
        assert_eq!(c.get(2, 0), Complex64::new(0.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_band_length_mismatch_panics() {
        let _ = TridiagonalMatrix::from_bands(vec![1.0], vec![1.0, 2.0, 3.0], vec![1.0, 2.0]);
    }
}
