//! Context module: solver selection and configuration.
//!
//! Higher layers (time steppers, curve fitters) pick a strategy through
//! [`SolverContext`] instead of naming a concrete solver type, so the
//! strategy can be swapped without touching call sites.

pub mod solver_context;
pub use solver_context::{SolverContext, SolverKind};
