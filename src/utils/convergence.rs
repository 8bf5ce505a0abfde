//! Convergence tracking & tolerance checks for iterative solvers.

/// Stopping criteria & stats.
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

/// Outcome of a solve: iteration count, last residual norm, and whether the
/// tolerance was actually met. `converged == false` after a normal return
/// means the iteration budget ran out first.
#[derive(Clone, Debug)]
pub struct SolveStats<T> {
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    /// Returns (should_stop, stats) given current `res_norm` and iteration `i`.
    pub fn check(&self, res_norm: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = res_norm < self.tol;
        (
            converged || i >= self.max_iters,
            SolveStats { iterations: i, final_residual: res_norm, converged },
        )
    }
}
