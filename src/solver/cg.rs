//! Conjugate Gradient for symmetric positive-definite systems, per Saad §6.1.

use crate::core::traits::{Indexing, InnerProduct, MatVec};
use crate::error::LaError;
use crate::solver::{LinearSolver, check_system};
use crate::utils::convergence::{Convergence, SolveStats};
use num_traits::Float;

/// One Conjugate Gradient update of the iterate `x`, residual `r` and search
/// direction `p`. Returns `‖r‖₂` after the step.
///
/// `r` and `p` must have been initialized to `b − A·x₀` before the first
/// call; dimensions are the caller's responsibility.
pub fn cg_step<M, T>(a: &M, x: &mut [T], r: &mut Vec<T>, p: &mut Vec<T>) -> T
where
    M: MatVec<Vec<T>>,
    T: Float,
{
    let ip = ();
    let n = x.len();
    let mut ap = vec![T::zero(); n];
    a.matvec(p, &mut ap);

    let rsq = ip.dot(r, r);
    let alpha = rsq / ip.dot(p, &ap);
    for i in 0..n {
        x[i] = x[i] + alpha * p[i];
        r[i] = r[i] - alpha * ap[i];
    }

    let rsq_new = ip.dot(r, r);
    let beta = rsq_new / rsq;
    for (pi, ri) in p.iter_mut().zip(r.iter()) {
        *pi = *ri + beta * *pi;
    }

    rsq_new.sqrt()
}

pub struct CgSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Float> CgSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters } }
    }
}

impl<M, T> LinearSolver<M, Vec<T>> for CgSolver<T>
where
    M: MatVec<Vec<T>> + Indexing,
    T: Float,
{
    type Error = LaError;
    type Scalar = T;

    /// Iterate until `‖r‖₂` drops below the tolerance or the budget runs
    /// out. Exact in at most n steps for an n×n SPD system.
    fn solve(&mut self, a: &M, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, LaError> {
        check_system(a, b, x)?;
        let ip = ();
        let n = b.len();
        let mut ax = vec![T::zero(); n];
        a.matvec(x, &mut ax);
        let mut r: Vec<T> = b.iter().zip(&ax).map(|(&bi, &axi)| bi - axi).collect();
        let mut p = r.clone();

        let res0 = ip.norm(&r);
        let mut stats =
            SolveStats { iterations: 0, final_residual: res0, converged: res0 < self.conv.tol };
        if stats.converged {
            return Ok(stats);
        }

        for i in 1..=self.conv.max_iters {
            let res = cg_step(a, x, &mut r, &mut p);
            let (stop, s) = self.conv.check(res, i);
            stats = s;
            if stop {
                break;
            }
        }
        Ok(stats)
    }
}

/// Run Conjugate Gradient and discard the stats (legacy-style convenience).
pub fn conjugate_gradient<M, T>(
    a: &M,
    b: &Vec<T>,
    x: &mut Vec<T>,
    max_iterations: usize,
    tolerance: T,
) -> Result<(), LaError>
where
    M: MatVec<Vec<T>> + Indexing,
    T: Float,
{
    CgSolver::new(tolerance, max_iterations).solve(a, b, x).map(|_| ())
}
