//! Direct dense solvers: triangular substitution, LU solve and inversion.
//!
//! The substitution routines assume strictly triangular structure with a
//! nonzero diagonal and do not verify either; only the shapes are checked.
//! `lu_solve` composes the Doolittle factorization with one forward and one
//! backward substitution, and `invert_with_lu` builds a full inverse from
//! column-wise triangular solves.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations

use crate::decomposition::lu::doolittle;
use crate::error::LaError;
use crate::matrix::dense::Mat;
use crate::matrix::ops::mat_mult;
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;
use num_traits::Float;

fn check_triangular_system<T: Float>(a: &Mat<T>, b: &[T]) -> Result<(), LaError> {
    if a.is_empty() || b.is_empty() {
        return Err(LaError::EmptyInput("triangular system"));
    }
    if !a.is_square() || a.nrows() != b.len() {
        return Err(LaError::DimensionMismatch(format!(
            "triangular solve of a {}x{} matrix against a vector of length {}",
            a.nrows(),
            a.ncols(),
            b.len()
        )));
    }
    Ok(())
}

/// Solve `L·x = b` for lower-triangular `L` by forward substitution.
///
/// The diagonal is assumed nonzero; a zero entry produces non-finite
/// components rather than an error.
pub fn forward_substitution<T: Float>(l: &Mat<T>, b: &[T]) -> Result<Vec<T>, LaError> {
    check_triangular_system(l, b)?;
    let n = b.len();
    let mut x = vec![T::zero(); n];
    x[0] = b[0] / l[(0, 0)];
    for i in 1..n {
        let mut sum = T::zero();
        for j in 0..i {
            sum = sum + l[(i, j)] * x[j];
        }
        x[i] = (b[i] - sum) / l[(i, i)];
    }
    Ok(x)
}

/// Solve `U·x = b` for upper-triangular `U` by backward substitution,
/// traversing from the last row up.
pub fn backwards_substitution<T: Float>(u: &Mat<T>, b: &[T]) -> Result<Vec<T>, LaError> {
    check_triangular_system(u, b)?;
    let n = b.len();
    let mut x = vec![T::zero(); n];
    x[n - 1] = b[n - 1] / u[(n - 1, n - 1)];
    for i in (0..n - 1).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum = sum + u[(i, j)] * x[j];
        }
        x[i] = (b[i] - sum) / u[(i, i)];
    }
    Ok(x)
}

/// Solve `A·x = b` by Doolittle factorization followed by forward and
/// backward substitution.
pub fn lu_solve<T: Float>(a: &Mat<T>, b: &[T]) -> Result<Vec<T>, LaError> {
    let (l, u) = doolittle(a)?;
    let y = forward_substitution(&l, b)?;
    backwards_substitution(&u, &y)
}

/// Invert a square matrix through its LU factorization.
///
/// Factors once, then solves one triangular system per identity column for
/// both factors and assembles `A⁻¹ = U⁻¹ · L⁻¹`.
pub fn invert_with_lu<T: Float>(a: &Mat<T>) -> Result<Mat<T>, LaError> {
    let (l, u) = doolittle(a)?;
    let n = a.nrows();
    let identity = Mat::identity(n)?;

    // U inverse, column by column; rows hold columns until the transpose
    let mut x = Mat::zeros(n, n);
    for i in 0..n {
        let column = backwards_substitution(&u, identity.row(i))?;
        x.row_mut(i).copy_from_slice(&column);
    }
    x.transpose_in_place();

    // L inverse, column by column
    let mut y = Mat::zeros(n, n);
    for i in 0..n {
        let column = forward_substitution(&l, identity.row(i))?;
        y.row_mut(i).copy_from_slice(&column);
    }
    y.transpose_in_place();

    mat_mult(&x, &y)
}

/// LU-backed direct solver behind the common [`LinearSolver`] interface,
/// so callers can swap it for an iterative strategy.
pub struct LuDirectSolver;

impl LuDirectSolver {
    pub fn new() -> Self {
        LuDirectSolver
    }
}

impl Default for LuDirectSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LinearSolver<Mat<T>, Vec<T>> for LuDirectSolver {
    type Error = LaError;
    type Scalar = T;

    /// Solve Ax = b by LU factorization; always "converges" in one step.
    fn solve(&mut self, a: &Mat<T>, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, LaError> {
        *x = lu_solve(a, b)?;
        Ok(SolveStats { iterations: 1, final_residual: T::zero(), converged: true })
    }
}
