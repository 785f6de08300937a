//! Error types for the benchmark harness and its configuration.

use crate::matrix::Elem;
use thiserror::Error;

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Failures detected while running a variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A variant produced a different value than the reference.
    #[error("{variant}: mismatch at ({row}, {col}): expected {expected}, got {actual}")]
    Mismatch {
        variant: String,
        row: usize,
        col: usize,
        expected: Elem,
        actual: Elem,
    },

    /// Operand or output size disagrees with the harness size.
    #[error("dimension mismatch: expected {expected}x{expected}, got {actual}x{actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Rejected benchmark settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("matrix size must be at least 1")]
    ZeroSize,

    #[error("tile size must be at least 1")]
    ZeroTile,

    #[error("repetition count must be at least 1")]
    ZeroRepetitions,

    #[error("no variants selected")]
    NoVariants,
}
