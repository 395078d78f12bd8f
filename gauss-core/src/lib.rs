//! Core types for Gauss: scalar parsing and the shared error type.
//!
//! The matrix engines in `gauss-matrix` take their numeric input as
//! strings at the prompt ("0.5", "3/4", "-1 1/2"); this crate turns those
//! tokens into finite `f64` values and defines the error vocabulary the
//! whole workspace reports through.

mod error;
mod scalar;

pub use error::GaussError;
pub use scalar::parse_scalar;
