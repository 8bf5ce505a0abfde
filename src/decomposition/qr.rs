//! QR decomposition via classical Gram-Schmidt orthogonalization.

use crate::error::LaError;
use crate::matrix::dense::Mat;
use crate::matrix::ops::{dot, l2_norm, mat_mult};
use num_traits::Float;

/// Factor an m×n matrix (`m ≥ n`, full column rank) into `A = Q · R` with
/// orthonormal columns in `Q` and upper-triangular `R`.
///
/// Columns are orthogonalized sequentially against all previous ones and
/// then normalized; `R` is recovered as `Qᵀ · A`. Classical Gram-Schmidt
/// performs no re-orthogonalization, which is adequate for well-conditioned
/// inputs.
pub fn qr_gram_schmidt<T: Float>(a: &Mat<T>) -> Result<(Mat<T>, Mat<T>), LaError> {
    if a.is_empty() {
        return Err(LaError::EmptyInput("matrix to factor"));
    }
    if a.nrows() < a.ncols() {
        return Err(LaError::DimensionMismatch(format!(
            "QR requires at least as many rows as columns, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }

    let n = a.ncols();
    // work on rows of the transpose so each column is a contiguous slice
    let a_transpose = a.transpose();
    let mut u = a_transpose.clone();

    for k in 1..n {
        for j in 0..k {
            let numerator = dot(a_transpose.row(k), u.row(j))?;
            let denominator = dot(u.row(j), u.row(j))?;
            let coefficient = numerator / denominator;
            let projection: Vec<T> = u.row(j).iter().map(|&e| coefficient * e).collect();
            for (uk, pj) in u.row_mut(k).iter_mut().zip(projection) {
                *uk = *uk - pj;
            }
        }
    }

    let mut q_transpose = u.clone();
    for i in 0..n {
        let norm = l2_norm(u.row(i));
        for e in q_transpose.row_mut(i) {
            *e = *e / norm;
        }
    }

    let r = mat_mult(&q_transpose, a)?;
    Ok((q_transpose.transpose(), r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn qr_matches_textbook_factors() {
        let a = Mat::from_rows(vec![
            vec![12.0, -51.0, 4.0],
            vec![6.0, 167.0, -68.0],
            vec![-4.0, 24.0, -41.0],
        ])
        .unwrap();
        let (q, r) = qr_gram_schmidt(&a).unwrap();

        let q_expected = Mat::from_rows(vec![
            vec![0.857, -0.3943, -0.3314],
            vec![0.4286, 0.9028, 0.0342],
            vec![-0.2857, 0.1714, -0.9429],
        ])
        .unwrap();
        let r_expected = Mat::from_rows(vec![
            vec![14.0, 21.0, -14.0],
            vec![0.0, 175.0, -70.0],
            vec![0.0, 0.0, 35.0],
        ])
        .unwrap();

        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(q[(i, j)], q_expected[(i, j)], epsilon = 1e-3);
                assert_abs_diff_eq!(r[(i, j)], r_expected[(i, j)], epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn q_has_orthonormal_columns_and_qr_reconstructs_input() {
        let a = Mat::from_rows(vec![
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0, 6.0],
        ])
        .unwrap();
        let (q, r) = qr_gram_schmidt(&a).unwrap();

        let qtq = mat_mult(&q.transpose(), &q).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(qtq[(i, j)], expected, epsilon = 1e-10);
            }
        }

        let qr = mat_mult(&q, &r).unwrap();
        for i in 0..3 {
            for j in 0..2 {
                assert_abs_diff_eq!(qr[(i, j)], a[(i, j)], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn rejects_wide_matrices() {
        let a = Mat::<f64>::zeros(2, 3);
        assert!(matches!(qr_gram_schmidt(&a), Err(LaError::DimensionMismatch(_))));
    }
}
