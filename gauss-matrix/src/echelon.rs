//! Row-echelon reduction with partial pivoting
//!
//! Walks the columns left to right: swap a usable pivot into place,
//! normalize the pivot row to 1, eliminate everything below. Pivots are
//! compared against exact zero and eliminated entries are written as
//! exact zeros, so reducing an already-reduced matrix is a no-op.

use gauss_core::GaussError;
use serde::{Deserialize, Serialize};

use crate::step::Step;
use crate::types::Matrix;

/// What to do when a column has no nonzero entry at or below the
/// diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotPolicy {
    /// Leave the column pivotless and move on (the textbook convention
    /// for rank-deficient matrices).
    SkipColumn,
    /// Stop with `SingularPivot`.
    Fail,
}

impl Default for PivotPolicy {
    fn default() -> Self {
        PivotPolicy::SkipColumn
    }
}

/// Reduces a matrix to row-echelon form.
#[derive(Debug, Clone)]
pub struct Reducer {
    matrix: Matrix,
    policy: PivotPolicy,
    verbose: bool,
}

/// Result of a reduction: the matrix in row-echelon form plus the steps
/// taken (empty unless the reducer was verbose).
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub matrix: Matrix,
    pub steps: Vec<Step>,
}

impl Reducer {
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            policy: PivotPolicy::default(),
            verbose: false,
        }
    }

    pub fn with_policy(mut self, policy: PivotPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the reduction to completion.
    ///
    /// Pivots are normalized to 1 and entries below each pivot zeroed;
    /// entries above pivots are left untouched (this is row-echelon form,
    /// not reduced row-echelon form).
    pub fn reduce(mut self) -> Result<Reduction, GaussError> {
        let (m, n) = (self.matrix.rows(), self.matrix.cols());
        let mut steps = Vec::new();

        for col in 0..m.min(n) {
            if self.at(col, col) == 0.0 {
                let below = (col + 1..m).find(|&row| self.at(row, col) != 0.0);
                match below {
                    Some(row) => {
                        self.matrix.data_mut().swap_rows(col, row);
                        self.record(&mut steps, format!("R{} <-> R{}", col + 1, row + 1));
                    }
                    None => match self.policy {
                        PivotPolicy::SkipColumn => continue,
                        PivotPolicy::Fail => {
                            return Err(GaussError::SingularPivot { col: col + 1 })
                        }
                    },
                }
            }

            let pivot = self.at(col, col);
            if pivot != 1.0 {
                // Divide rather than multiply by the reciprocal so the
                // pivot entry lands on exactly 1.0.
                let data = self.matrix.data_mut();
                for k in 0..n {
                    data[(col, k)] /= pivot;
                }
                self.record(
                    &mut steps,
                    format!("R'{} = {}*R{}", col + 1, 1.0 / pivot, col + 1),
                );
            }

            for row in col + 1..m {
                let factor = self.at(row, col);
                if factor == 0.0 {
                    continue;
                }
                let data = self.matrix.data_mut();
                for k in 0..n {
                    data[(row, k)] -= factor * data[(col, k)];
                }
                // Write the eliminated entry as an exact zero so the
                // pivot search never trips on rounding residue.
                data[(row, col)] = 0.0;
                self.record(
                    &mut steps,
                    format!("R'{} = R{} - {}*R{}", row + 1, row + 1, factor, col + 1),
                );
            }
        }

        Ok(Reduction {
            matrix: self.matrix,
            steps,
        })
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self.matrix.data()[(row, col)]
    }

    fn record(&self, steps: &mut Vec<Step>, description: String) {
        if self.verbose {
            steps.push(Step {
                description,
                matrix: self.matrix.to_rows(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn reduces_the_textbook_example() {
        let reduction = Reducer::new(matrix(vec![vec![2.0, 4.0], vec![1.0, 3.0]]))
            .reduce()
            .unwrap();
        assert_eq!(reduction.matrix.to_rows(), vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn upper_triangular_gets_unit_diagonal() {
        let reduction = Reducer::new(matrix(vec![vec![2.0, 3.0], vec![0.0, 4.0]]))
            .reduce()
            .unwrap();
        assert_eq!(reduction.matrix.to_rows(), vec![vec![1.0, 1.5], vec![0.0, 1.0]]);
    }

    #[test]
    fn reduction_is_idempotent() {
        let once = Reducer::new(matrix(vec![vec![2.0, 4.0], vec![1.0, 3.0]]))
            .reduce()
            .unwrap();
        let twice = Reducer::new(once.matrix.clone()).reduce().unwrap();
        assert_eq!(once.matrix, twice.matrix);
        assert!(twice.steps.is_empty());
    }

    #[test]
    fn swaps_a_pivot_up_when_diagonal_is_zero() {
        let reduction = Reducer::new(matrix(vec![vec![0.0, 1.0], vec![2.0, 3.0]]))
            .with_verbose(true)
            .reduce()
            .unwrap();
        assert_eq!(reduction.matrix.to_rows(), vec![vec![1.0, 1.5], vec![0.0, 1.0]]);
        assert_eq!(reduction.steps[0].description, "R1 <-> R2");
    }

    #[test]
    fn pivotless_column_is_skipped_by_default() {
        let reduction = Reducer::new(matrix(vec![vec![0.0, 0.0], vec![0.0, 5.0]]))
            .reduce()
            .unwrap();
        assert_eq!(reduction.matrix.to_rows(), vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn pivotless_column_fails_under_fail_policy() {
        let result = Reducer::new(matrix(vec![vec![0.0, 0.0], vec![0.0, 5.0]]))
            .with_policy(PivotPolicy::Fail)
            .reduce();
        assert!(matches!(result, Err(GaussError::SingularPivot { col: 1 })));
    }

    #[test]
    fn handles_rectangular_matrices() {
        let wide = Reducer::new(matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]))
            .reduce()
            .unwrap();
        assert_eq!(
            wide.matrix.to_rows(),
            vec![vec![1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0]]
        );

        let tall = Reducer::new(matrix(vec![vec![1.0], vec![2.0], vec![3.0]]))
            .reduce()
            .unwrap();
        assert_eq!(tall.matrix.to_rows(), vec![vec![1.0], vec![0.0], vec![0.0]]);
    }

    #[test]
    fn verbose_mode_narrates_each_sub_step() {
        let reduction = Reducer::new(matrix(vec![vec![2.0, 4.0], vec![1.0, 3.0]]))
            .with_verbose(true)
            .reduce()
            .unwrap();
        let descriptions: Vec<&str> =
            reduction.steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, vec!["R'1 = 0.5*R1", "R'2 = R2 - 1*R1"]);

        let quiet = Reducer::new(matrix(vec![vec![2.0, 4.0], vec![1.0, 3.0]]))
            .reduce()
            .unwrap();
        assert!(quiet.steps.is_empty());
    }
}
