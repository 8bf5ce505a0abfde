//! Matrix module: the dense matrix type and its operations.

pub mod dense;
pub use dense::Mat;
pub mod ops;
pub use ops::{
    add_vectors, calculate_residual, devectorize, dot, kronecker_product, l2_norm, mat_mult,
    mat_vec_mult, scalar_multiply, scalar_multiply_vec, vectorize,
};
