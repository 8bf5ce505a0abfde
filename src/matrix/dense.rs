//! Dense matrix type backed by flat row-major storage.
//!
//! `Mat<T>` owns a single `Vec<T>` buffer plus its `(rows, columns)` shape, so
//! every row is guaranteed to have the same length and element access is
//! bounds-checked uniformly. Trait implementations at the bottom of this
//! module let `Mat<T>` and plain `Vec<T>` vectors plug into the generic
//! solver interfaces.

use crate::core::traits::{Indexing, InnerProduct, MatVec};
use crate::error::LaError;
use num_traits::Float;
use std::ops::{Index, IndexMut};

/// Dense rectangular matrix with row-major storage.
///
/// Invariant: `data.len() == nrows * ncols` at all times.
#[derive(Clone, Debug, PartialEq)]
pub struct Mat<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T> Default for Mat<T> {
    fn default() -> Self {
        Self { nrows: 0, ncols: 0, data: Vec::new() }
    }
}

impl<T: Float> Mat<T> {
    /// Empty 0×0 matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-filled matrix of the given shape.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, data: vec![T::zero(); nrows * ncols] }
    }

    /// Build a matrix by evaluating `f(i, j)` at every position.
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// Construct from nested rows, e.g. `Mat::from_rows(vec![vec![1.0, 2.0]])`.
    ///
    /// Fails with `DimensionMismatch` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LaError> {
        if rows.is_empty() {
            return Ok(Self::new());
        }
        let ncols = rows[0].len();
        let mut data = Vec::with_capacity(rows.len() * ncols);
        let nrows = rows.len();
        for row in rows {
            if row.len() != ncols {
                return Err(LaError::DimensionMismatch(format!(
                    "ragged row of length {} in a matrix with {} columns",
                    row.len(),
                    ncols
                )));
            }
            data.extend(row);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Wrap a raw row-major buffer.
    ///
    /// Fails with `DimensionMismatch` if `data.len() != nrows * ncols`.
    pub fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, LaError> {
        if data.len() != nrows * ncols {
            return Err(LaError::DimensionMismatch(format!(
                "buffer of length {} cannot be shaped as {}x{}",
                data.len(),
                nrows,
                ncols
            )));
        }
        Ok(Self { nrows, ncols, data })
    }

    /// n×n identity matrix. Fails with `InvalidSize` for `n == 0`.
    pub fn identity(n: usize) -> Result<Self, LaError> {
        if n == 0 {
            return Err(LaError::InvalidSize(n));
        }
        let mut eye = Self::zeros(n, n);
        for i in 0..n {
            eye[(i, i)] = T::one();
        }
        Ok(eye)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Bounds-checked element access.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.nrows && j < self.ncols { self.data.get(i * self.ncols + j) } else { None }
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Mutable row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Reshape to the given dimensions, keeping elements that remain in
    /// range and zero-filling the rest.
    pub fn resize(&mut self, nrows: usize, ncols: usize) {
        let mut next = Self::zeros(nrows, ncols);
        for i in 0..nrows.min(self.nrows) {
            for j in 0..ncols.min(self.ncols) {
                next[(i, j)] = self[(i, j)];
            }
        }
        *self = next;
    }

    /// Copy-producing transpose.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Transpose without reallocating for square matrices; rectangular
    /// matrices fall back to a copy.
    pub fn transpose_in_place(&mut self) {
        if self.is_square() {
            for i in 0..self.nrows {
                for j in (i + 1)..self.ncols {
                    let tmp = self[(i, j)];
                    self[(i, j)] = self[(j, i)];
                    self[(j, i)] = tmp;
                }
            }
        } else {
            *self = self.transpose();
        }
    }

    /// Elementwise sum. Fails with `DimensionMismatch` on unequal shapes.
    pub fn add(&self, other: &Self) -> Result<Self, LaError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference. Fails with `DimensionMismatch` on unequal shapes.
    pub fn sub(&self, other: &Self) -> Result<Self, LaError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self, LaError> {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Err(LaError::DimensionMismatch(format!(
                "{}x{} and {}x{} operands",
                self.nrows, self.ncols, other.nrows, other.ncols
            )));
        }
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        Ok(Self { nrows: self.nrows, ncols: self.ncols, data })
    }
}

impl<T> Index<(usize, usize)> for Mat<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Mat<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.nrows && j < self.ncols, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.ncols + j]
    }
}

/// Matrix-vector multiplication for `Mat`: `y = A * x`.
impl<T: Float> MatVec<Vec<T>> for Mat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            y[i] = T::zero();
            for j in 0..self.ncols() {
                y[i] = y[i] + self[(i, j)] * x[j];
            }
        }
    }
}

impl<T> Indexing for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
}

/// Treats a vector as a column vector.
impl<T> Indexing for Vec<T> {
    fn nrows(&self) -> usize {
        self.len()
    }
}

/// Inner product and norm for plain vectors.
impl<T: Float> InnerProduct<Vec<T>> for () {
    type Scalar = T;
    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &Vec<T>, y: &Vec<T>) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        x.iter().zip(y.iter()).map(|(xi, yi)| *xi * *yi).fold(T::zero(), |acc, v| acc + v)
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vec<T>) -> T {
        x.iter().map(|xi| *xi * *xi).fold(T::zero(), |acc, v| acc + v).sqrt()
    }
}
