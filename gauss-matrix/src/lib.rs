//! Gauss Matrix - step-by-step elimination engines
//!
//! Provides the algorithmic core of Gauss:
//! - Elementary operations (row addition, row scaling, row swap) in row
//!   or congruence mode, one narrated step at a time
//! - Row-echelon reduction with partial pivoting and an explicit policy
//!   for pivotless columns
//! - Determinant computation via narrated elimination
//!
//! All engines mutate a dense `f64` matrix in place and can emit a
//! [`Step`] record per sub-step: the symbolic row operation performed
//! (e.g. `R'2 = R2 + 0.5*R1`) plus a snapshot of the matrix after it.
//! Interactive shells are expected to live outside this crate and drive
//! the engines one call at a time.

mod determinant;
mod echelon;
mod ops;
mod step;
mod types;

pub use determinant::{determinant, Determinant};
pub use echelon::{PivotPolicy, Reducer, Reduction};
pub use ops::{ElementaryOp, Mode, Operator};
pub use step::Step;
pub use types::Matrix;
