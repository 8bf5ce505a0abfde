//! Gauss-Seidel iteration.
//!
//! Same update rule as Jacobi but each sweep consumes the components already
//! updated within it, which converges faster on the same class of matrices.

use crate::core::traits::Indexing;
use crate::error::LaError;
use crate::matrix::ops::l2_norm;
use crate::solver::{LinearSolver, check_system};
use crate::utils::convergence::{Convergence, SolveStats};
use num_traits::Float;
use std::ops::Index;

/// One Gauss-Seidel sweep over `x`; components with index below `i` are read
/// from the current sweep. Returns `‖x_new − x_old‖₂`.
pub fn gauss_seidel_sweep<M, T>(a: &M, b: &[T], x: &mut [T]) -> T
where
    M: Index<(usize, usize), Output = T>,
    T: Float,
{
    let n = b.len();
    let x_old = x.to_vec();
    for i in 0..n {
        let mut sum = T::zero();
        for j in 0..n {
            if j != i {
                sum = sum + a[(i, j)] * x[j];
            }
        }
        x[i] = (b[i] - sum) / a[(i, i)];
    }
    let step: Vec<T> = x.iter().zip(&x_old).map(|(&xn, &xo)| xn - xo).collect();
    l2_norm(&step)
}

pub struct GaussSeidelSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Float> GaussSeidelSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters } }
    }
}

impl<M, T> LinearSolver<M, Vec<T>> for GaussSeidelSolver<T>
where
    M: Index<(usize, usize), Output = T> + Indexing,
    T: Float,
{
    type Error = LaError;
    type Scalar = T;

    fn solve(&mut self, a: &M, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, LaError> {
        check_system(a, b, x)?;
        let mut stats =
            SolveStats { iterations: 0, final_residual: T::infinity(), converged: false };
        for i in 1..=self.conv.max_iters {
            let res = gauss_seidel_sweep(a, b, x);
            let (stop, s) = self.conv.check(res, i);
            stats = s;
            if stop {
                break;
            }
        }
        Ok(stats)
    }
}

/// Run Gauss-Seidel and discard the stats (legacy-style convenience).
pub fn gauss_seidel<M, T>(
    a: &M,
    b: &Vec<T>,
    x: &mut Vec<T>,
    max_iterations: usize,
    tolerance: T,
) -> Result<(), LaError>
where
    M: Index<(usize, usize), Output = T> + Indexing,
    T: Float,
{
    GaussSeidelSolver::new(tolerance, max_iterations).solve(a, b, x).map(|_| ())
}
