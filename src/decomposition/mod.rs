//! Matrix decompositions: Doolittle LU, Cholesky and Gram-Schmidt QR.

pub mod cholesky;
pub use cholesky::cholesky;
pub mod lu;
pub use lu::doolittle;
pub mod qr;
pub use qr::qr_gram_schmidt;
