//! Cholesky factorization for symmetric positive-definite matrices.

use crate::error::LaError;
use crate::matrix::dense::Mat;
use num_traits::Float;

/// Factor a symmetric positive-definite matrix into `A = G · Gᵀ` with
/// lower-triangular `G`.
///
/// Positive definiteness is checked lazily: before each square root the
/// running diagonal term is tested, and a negative value fails with
/// `NotPositiveDefinite` carrying the offending row. Symmetry of the input
/// is assumed, not verified.
pub fn cholesky<T: Float>(a: &Mat<T>) -> Result<Mat<T>, LaError> {
    if a.is_empty() {
        return Err(LaError::EmptyInput("matrix to factor"));
    }
    if !a.is_square() {
        return Err(LaError::DimensionMismatch(format!(
            "Cholesky factorization requires a square matrix, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }

    let n = a.nrows();
    let mut g = a.clone();
    for j in 0..n {
        for i in 0..n {
            if i < j {
                g[(i, j)] = T::zero();
                continue;
            }

            let mut sum = T::zero();
            for k in 0..j {
                sum = sum + g[(i, k)] * g[(j, k)];
            }

            if a[(i, i)] - sum < T::zero() {
                return Err(LaError::NotPositiveDefinite(i));
            }

            if i == j {
                g[(i, j)] = (a[(j, j)] - sum).sqrt();
            } else {
                g[(i, j)] = (a[(i, j)] - sum) / g[(j, j)];
            }
        }
    }

    Ok(g)
}
