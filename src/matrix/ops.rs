//! Checked dense matrix and vector operations.
//!
//! Free functions over [`Mat`] and slices that validate shapes and surface
//! [`LaError`] instead of panicking. These are the building blocks the
//! decompositions and solvers compose.

use crate::error::LaError;
use crate::matrix::dense::Mat;
use num_traits::Float;

/// Matrix product `C = A · B` for an m×n `A` and n×p `B`.
///
/// Fails with `EmptyInput` if either operand is empty and with
/// `DimensionMismatch` if the inner dimensions differ.
pub fn mat_mult<T: Float>(a: &Mat<T>, b: &Mat<T>) -> Result<Mat<T>, LaError> {
    if a.is_empty() {
        return Err(LaError::EmptyInput("left matrix operand"));
    }
    if b.is_empty() {
        return Err(LaError::EmptyInput("right matrix operand"));
    }
    if a.ncols() != b.nrows() {
        return Err(LaError::DimensionMismatch(format!(
            "cannot multiply {}x{} by {}x{}",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        )));
    }
    let mut c = Mat::zeros(a.nrows(), b.ncols());
    for i in 0..a.nrows() {
        for j in 0..b.ncols() {
            let mut sum = T::zero();
            for k in 0..a.ncols() {
                sum = sum + a[(i, k)] * b[(k, j)];
            }
            c[(i, j)] = sum;
        }
    }
    Ok(c)
}

/// Matrix-vector product `A · b` for an m×n `A` and length-n `b`.
pub fn mat_vec_mult<T: Float>(a: &Mat<T>, b: &[T]) -> Result<Vec<T>, LaError> {
    if a.is_empty() {
        return Err(LaError::EmptyInput("matrix operand"));
    }
    if b.is_empty() {
        return Err(LaError::EmptyInput("vector operand"));
    }
    if a.ncols() != b.len() {
        return Err(LaError::DimensionMismatch(format!(
            "cannot multiply {}x{} by a vector of length {}",
            a.nrows(),
            a.ncols(),
            b.len()
        )));
    }
    let mut result = vec![T::zero(); a.nrows()];
    for (i, out) in result.iter_mut().enumerate() {
        let mut sum = T::zero();
        for (k, bk) in b.iter().enumerate() {
            sum = sum + a[(i, k)] * *bk;
        }
        *out = sum;
    }
    Ok(result)
}

/// Dot (scalar) product of two vectors of equal length.
pub fn dot<T: Float>(u: &[T], v: &[T]) -> Result<T, LaError> {
    if u.is_empty() {
        return Err(LaError::EmptyInput("first vector"));
    }
    if v.is_empty() {
        return Err(LaError::EmptyInput("second vector"));
    }
    if u.len() != v.len() {
        return Err(LaError::DimensionMismatch(format!(
            "vectors of length {} and {}",
            u.len(),
            v.len()
        )));
    }
    Ok(u.iter().zip(v).map(|(&ui, &vi)| ui * vi).fold(T::zero(), |acc, p| acc + p))
}

/// Euclidean norm `‖v‖₂`; returns zero for the empty or zero vector.
pub fn l2_norm<T: Float>(v: &[T]) -> T {
    v.iter().map(|&vi| vi * vi).fold(T::zero(), |acc, s| acc + s).sqrt()
}

/// Elementwise vector sum.
pub fn add_vectors<T: Float>(a: &[T], b: &[T]) -> Result<Vec<T>, LaError> {
    if a.len() != b.len() {
        return Err(LaError::DimensionMismatch(format!(
            "vectors of length {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&ai, &bi)| ai + bi).collect())
}

/// Scale every element of a vector.
pub fn scalar_multiply_vec<T: Float>(scalar: T, a: &[T]) -> Vec<T> {
    a.iter().map(|&ai| scalar * ai).collect()
}

/// Scale every element of a matrix.
pub fn scalar_multiply<T: Float>(scalar: T, a: &Mat<T>) -> Mat<T> {
    Mat::from_fn(a.nrows(), a.ncols(), |i, j| scalar * a[(i, j)])
}

/// Kronecker product of an m×n `A` and p×q `B`: the (mp)×(nq) matrix whose
/// block (i, j) is `A(i, j) · B`.
pub fn kronecker_product<T: Float>(a: &Mat<T>, b: &Mat<T>) -> Result<Mat<T>, LaError> {
    if a.is_empty() {
        return Err(LaError::EmptyInput("left matrix operand"));
    }
    if b.is_empty() {
        return Err(LaError::EmptyInput("right matrix operand"));
    }
    let (p, q) = (b.nrows(), b.ncols());
    let mut c = Mat::zeros(a.nrows() * p, a.ncols() * q);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            for k in 0..p {
                for l in 0..q {
                    c[(i * p + k, j * q + l)] = a[(i, j)] * b[(k, l)];
                }
            }
        }
    }
    Ok(c)
}

/// Flatten a matrix into a vector by stacking its columns.
pub fn vectorize<T: Float>(a: &Mat<T>) -> Vec<T> {
    let mut v = Vec::with_capacity(a.nrows() * a.ncols());
    for j in 0..a.ncols() {
        for i in 0..a.nrows() {
            v.push(a[(i, j)]);
        }
    }
    v
}

/// Reassemble a column-stacked vector into a matrix with `rows` rows.
///
/// Inverse of [`vectorize`]: `devectorize(&vectorize(&a), a.nrows()) == a`.
pub fn devectorize<T: Float>(v: &[T], rows: usize) -> Result<Mat<T>, LaError> {
    if rows == 0 {
        return Err(LaError::InvalidSize(rows));
    }
    if v.len() % rows != 0 {
        return Err(LaError::DimensionMismatch(format!(
            "vector of length {} does not divide into columns of length {}",
            v.len(),
            rows
        )));
    }
    let cols = v.len() / rows;
    Ok(Mat::from_fn(rows, cols, |i, j| v[j * rows + i]))
}

/// Residual `b − A·x` of a candidate solution to `A·x = b`.
pub fn calculate_residual<T: Float>(a: &Mat<T>, b: &[T], x: &[T]) -> Result<Vec<T>, LaError> {
    let ax = mat_vec_mult(a, x)?;
    if ax.len() != b.len() {
        return Err(LaError::DimensionMismatch(format!(
            "right-hand side of length {} for a {}x{} system",
            b.len(),
            a.nrows(),
            a.ncols()
        )));
    }
    Ok(b.iter().zip(&ax).map(|(&bi, &axi)| bi - axi).collect())
}
