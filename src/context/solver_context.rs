//! Factory for the dense solver strategies.

use crate::error::LaError;
use crate::matrix::dense::Mat;
use crate::solver::{CgSolver, GaussSeidelSolver, JacobiSolver, LinearSolver, LuDirectSolver};
use crate::utils::convergence::SolveStats;
use num_traits::Float;

/// Enum representing the available solver strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    /// Jacobi iteration (diagonally dominant matrices)
    Jacobi,
    /// Gauss-Seidel iteration (diagonally dominant matrices)
    GaussSeidel,
    /// Conjugate Gradient (SPD matrices)
    ConjugateGradient,
    /// Direct solve through the LU factorization
    DirectLu,
}

/// Context and configuration for a dense linear solve.
///
/// Holds the solver kind, tolerance and iteration budget; `solve` dispatches
/// to the configured strategy. The tolerance and budget are ignored by the
/// direct strategy.
pub struct SolverContext<T> {
    pub kind: SolverKind,
    pub tol: T,
    pub max_iters: usize,
}

impl<T: Float> SolverContext<T> {
    pub fn new(kind: SolverKind, tol: T, max_iters: usize) -> Self {
        Self { kind, tol, max_iters }
    }

    /// Solve `A·x = b` with the configured strategy, overwriting `x`.
    pub fn solve(&self, a: &Mat<T>, b: &Vec<T>, x: &mut Vec<T>) -> Result<SolveStats<T>, LaError> {
        match self.kind {
            SolverKind::Jacobi => JacobiSolver::new(self.tol, self.max_iters).solve(a, b, x),
            SolverKind::GaussSeidel => {
                GaussSeidelSolver::new(self.tol, self.max_iters).solve(a, b, x)
            }
            SolverKind::ConjugateGradient => {
                CgSolver::new(self.tol, self.max_iters).solve(a, b, x)
            }
            SolverKind::DirectLu => LuDirectSolver::new().solve(a, b, x),
        }
    }
}
