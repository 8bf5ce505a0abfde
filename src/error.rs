use thiserror::Error;

// Unified error type for lakit

#[derive(Error, Debug)]
pub enum LaError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    #[error("matrix is not positive definite (detected at row {0})")]
    NotPositiveDefinite(usize),
    #[error("invalid matrix size {0}")]
    InvalidSize(usize),
}
