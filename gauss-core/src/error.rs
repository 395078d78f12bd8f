//! Errors shared across the workspace
//!
//! All fallible operations report through `GaussError`. Errors are
//! synchronous and carry enough context to be printed at the prompt; a
//! failed step leaves the matrix exactly as it was before that step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for matrix construction, parsing and elimination.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaussError {
    /// The matrix has the wrong shape for the requested operation
    /// (ragged input, congruence mode on a non-square or non-symmetric
    /// matrix, determinant of a rectangular matrix).
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Unrecognized operating mode token.
    #[error("unknown mode {0:?} (expected \"row\" or \"congruence\")")]
    InvalidMode(String),

    /// Unrecognized operation code or wrong argument count for a code.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// A token could not be read as a number, fraction or index.
    #[error("cannot parse {0:?} as a number")]
    Parse(String),

    /// A 1-based row index outside the matrix.
    #[error("row index {index} out of range for a matrix with {rows} rows")]
    IndexOutOfRange { index: usize, rows: usize },

    /// A column had no usable pivot during elimination.
    #[error("no nonzero pivot available in column {col}")]
    SingularPivot { col: usize },
}
