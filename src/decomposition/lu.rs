//! Doolittle LU factorization without pivoting.

use crate::error::LaError;
use crate::matrix::dense::Mat;
use num_traits::Float;

/// Factor a square matrix into `A = L · U` with unit-lower-triangular `L`
/// and upper-triangular `U`.
///
/// No pivoting is performed: a zero pivot `U(k, k)` propagates `inf`/`nan`
/// into the factors instead of raising an error, so the input must admit a
/// pivot-free elimination. Suitable for the well-conditioned systems this
/// crate targets.
pub fn doolittle<T: Float>(a: &Mat<T>) -> Result<(Mat<T>, Mat<T>), LaError> {
    if a.is_empty() {
        return Err(LaError::EmptyInput("matrix to factor"));
    }
    if !a.is_square() {
        return Err(LaError::DimensionMismatch(format!(
            "LU factorization requires a square matrix, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }

    let n = a.nrows();
    let mut l = Mat::identity(n)?;
    let mut u = Mat::identity(n)?;

    for k in 0..n {
        // row k of U
        for q in k..n {
            let mut sum = T::zero();
            for j in 0..k {
                sum = sum + l[(k, j)] * u[(j, q)];
            }
            u[(k, q)] = a[(k, q)] - sum;
        }

        // column k of L; the principal diagonal stays at 1
        for i in (k + 1)..n {
            let mut sum = T::zero();
            for j in 0..k {
                sum = sum + l[(i, j)] * u[(j, k)];
            }
            l[(i, k)] = (a[(i, k)] - sum) / u[(k, k)];
        }
    }

    Ok((l, u))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::ops::mat_mult;
    use approx::assert_abs_diff_eq;

    #[test]
    fn doolittle_matches_textbook_factors() {
        let a = Mat::from_rows(vec![
            vec![2.0, -1.0, -2.0],
            vec![-4.0, 6.0, 3.0],
            vec![-4.0, -2.0, 8.0],
        ])
        .unwrap();
        let (l, u) = doolittle(&a).unwrap();

        let l_expected =
            Mat::from_rows(vec![vec![1.0, 0.0, 0.0], vec![-2.0, 1.0, 0.0], vec![-2.0, -1.0, 1.0]])
                .unwrap();
        let u_expected =
            Mat::from_rows(vec![vec![2.0, -1.0, -2.0], vec![0.0, 4.0, -1.0], vec![0.0, 0.0, 3.0]])
                .unwrap();

        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(l[(i, j)], l_expected[(i, j)], epsilon = 1e-3);
                assert_abs_diff_eq!(u[(i, j)], u_expected[(i, j)], epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn product_of_factors_reconstructs_input() {
        let a = Mat::from_rows(vec![
            vec![4.0, 3.0, 2.0],
            vec![2.0, 4.0, 1.0],
            vec![3.0, 2.0, 5.0],
        ])
        .unwrap();
        let (l, u) = doolittle(&a).unwrap();
        let lu = mat_mult(&l, &u).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(lu[(i, j)], a[(i, j)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn zero_pivot_yields_non_finite_factors() {
        // leading pivot is zero and no row exchange happens
        let a = Mat::from_rows(vec![vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let (l, _u) = doolittle(&a).unwrap();
        assert!(!l[(1, 0)].is_finite());
    }

    #[test]
    fn rejects_rectangular_input() {
        let a = Mat::<f64>::zeros(2, 3);
        assert!(matches!(doolittle(&a), Err(LaError::DimensionMismatch(_))));
        assert!(matches!(doolittle(&Mat::<f64>::new()), Err(LaError::EmptyInput(_))));
    }
}
