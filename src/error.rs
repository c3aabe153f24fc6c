use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Input validation failures. All are immediate and non-retryable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("vectors must have the same length (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("cross product needs vectors of length 3 (got {left} and {right})")]
    InvalidDimension { left: usize, right: usize },

    #[error("{name} {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
