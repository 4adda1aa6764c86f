//! Error types for the performance model

use std::error::Error;
use std::fmt;

/// Errors reported by the cost-model core.
///
/// Configuration errors are detected eagerly, before any blocking work;
/// precondition errors are raised by metric accessors called out of order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A non-positive architecture parameter
    InvalidParams {
        param: &'static str,
        value: usize,
    },
    /// A metric accessor was called before `preprocess`
    NotPreprocessed,
    /// The reference-multiply vector length does not match the matrix
    DimensionMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidParams { param, value } => {
                write!(f, "architecture parameter {} must be positive (got {})", param, value)
            }
            ModelError::NotPreprocessed => {
                write!(f, "metrics queried before preprocess() populated blocking results")
            }
            ModelError::DimensionMismatch { expected, actual } => {
                write!(f, "vector length {} does not match matrix columns {}", actual, expected)
            }
        }
    }
}

impl Error for ModelError {}
