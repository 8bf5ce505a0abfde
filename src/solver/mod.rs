//! Direct & iterative solver interfaces.

use crate::utils::convergence::SolveStats;

/// Common interface for any direct or iterative solver.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy + PartialOrd;
    /// Solve A·x = b, writing result into `x`.
    /// Returns iteration stats (including convergence info).
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x: &mut V,
    ) -> Result<SolveStats<<Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
}

pub mod direct;
pub use direct::{
    LuDirectSolver, backwards_substitution, forward_substitution, invert_with_lu, lu_solve,
};

pub mod jacobi;
pub use jacobi::{JacobiSolver, jacobi, jacobi_sweep};

pub mod gauss_seidel;
pub use gauss_seidel::{GaussSeidelSolver, gauss_seidel, gauss_seidel_sweep};

pub mod cg;
pub use cg::{CgSolver, cg_step, conjugate_gradient};

use crate::core::traits::Indexing;
use crate::error::LaError;

/// Shared shape validation for the iterative solvers: a non-empty system
/// with `b` and `x` matching its row dimension.
pub(crate) fn check_system<M, V>(a: &M, b: &V, x: &V) -> Result<(), LaError>
where
    M: Indexing,
    V: Indexing,
{
    let n = a.nrows();
    if n == 0 {
        return Err(LaError::EmptyInput("system matrix"));
    }
    if b.nrows() != n || x.nrows() != n {
        return Err(LaError::DimensionMismatch(format!(
            "system of size {} with right-hand side of length {} and unknown of length {}",
            n,
            b.nrows(),
            x.nrows()
        )));
    }
    Ok(())
}
