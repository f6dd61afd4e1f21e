//! Error types shared across the toolkit.

use thiserror::Error;

/// Errors surfaced by vector arithmetic, clustering, and the utility
/// helpers. All of them are detected synchronously and returned to the
/// caller before any partial work is visible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Malformed input: non-numeric values, empty or zero-sized
    /// construction, empty group folds, non-positive parameters.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was wrong with the input
        message: String,
    },

    /// Binary vector operation between vectors of differing dimension.
    #[error("dimension mismatch: expected {expected}, actual {actual}")]
    DimensionMismatch {
        /// Dimension of the left-hand vector
        expected: usize,
        /// Dimension of the offending vector
        actual: usize,
    },

    /// Coordinate access or mutation with an index outside the vector.
    #[error("index {index} out of bounds for dimension {dimension}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Dimension of the vector
        dimension: usize,
    },

    /// Operation the type deliberately refuses, such as removing a
    /// coordinate from a fixed-dimension vector.
    #[error("unsupported operation: {message}")]
    UnsupportedOperation {
        /// What was attempted
        message: &'static str,
    },

    /// Clustering input is not a collection of vectors of equal dimension.
    #[error("data points are not vectors of equal dimension")]
    InconsistentData,
}

impl MathError {
    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, dimension: usize) -> Self {
        Self::IndexOutOfBounds { index, dimension }
    }
}
