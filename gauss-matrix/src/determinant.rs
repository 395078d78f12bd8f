//! Determinant via narrated elimination
//!
//! Eliminates below the diagonal without normalizing, then multiplies the
//! diagonal. Row swaps flip the sign; a column with no usable pivot means
//! the matrix is singular and the determinant is exactly zero.

use gauss_core::GaussError;

use crate::step::Step;
use crate::types::Matrix;

/// Result of a determinant computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Determinant {
    pub value: f64,
    pub steps: Vec<Step>,
}

/// Compute the determinant of a square matrix.
///
/// The input is not modified; elimination runs on a working copy. Steps
/// are recorded only in verbose mode.
pub fn determinant(matrix: &Matrix, verbose: bool) -> Result<Determinant, GaussError> {
    if !matrix.is_square() {
        return Err(GaussError::InvalidShape(format!(
            "determinant needs a square matrix, got {}x{}",
            matrix.rows(),
            matrix.cols()
        )));
    }

    let mut work = matrix.clone();
    let n = work.rows();
    let mut steps = Vec::new();
    let mut sign = 1.0;

    for col in 0..n {
        if work.data()[(col, col)] == 0.0 {
            let below = (col + 1..n).find(|&row| work.data()[(row, col)] != 0.0);
            match below {
                Some(row) => {
                    work.data_mut().swap_rows(col, row);
                    sign = -sign;
                    record(verbose, &mut steps, &work, format!("R{} <-> R{}", col + 1, row + 1));
                }
                // Whole column is zero at and below the diagonal.
                None => return Ok(Determinant { value: 0.0, steps }),
            }
        }

        let pivot = work.data()[(col, col)];
        for row in col + 1..n {
            let factor = work.data()[(row, col)] / pivot;
            if factor == 0.0 {
                continue;
            }
            let data = work.data_mut();
            for k in 0..n {
                data[(row, k)] -= factor * data[(col, k)];
            }
            data[(row, col)] = 0.0;
            record(
                verbose,
                &mut steps,
                &work,
                format!("R'{} = R{} - {}*R{}", row + 1, row + 1, factor, col + 1),
            );
        }
    }

    let value = sign * (0..n).map(|i| work.data()[(i, i)]).product::<f64>();
    Ok(Determinant { value, steps })
}

fn record(verbose: bool, steps: &mut Vec<Step>, work: &Matrix, description: String) {
    if verbose {
        steps.push(Step {
            description,
            matrix: work.to_rows(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn two_by_two() {
        let det = determinant(&matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]), false).unwrap();
        assert_eq!(det.value, -2.0);
    }

    #[test]
    fn identity_has_determinant_one() {
        let det = determinant(
            &matrix(vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ]),
            false,
        )
        .unwrap();
        assert_eq!(det.value, 1.0);
    }

    #[test]
    fn singular_matrix_is_exactly_zero() {
        let det = determinant(&matrix(vec![vec![1.0, 2.0], vec![2.0, 4.0]]), false).unwrap();
        assert_eq!(det.value, 0.0);
    }

    #[test]
    fn row_swap_flips_the_sign() {
        let det = determinant(&matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]), false).unwrap();
        assert_eq!(det.value, -1.0);
    }

    #[test]
    fn input_matrix_is_untouched() {
        let m = matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        determinant(&m, false).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn rejects_rectangular_matrices() {
        let rect = matrix(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(
            determinant(&rect, false),
            Err(GaussError::InvalidShape(_))
        ));
    }

    #[test]
    fn verbose_mode_narrates_elimination() {
        let det = determinant(&matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]), true).unwrap();
        assert_eq!(det.steps.len(), 1);
        assert_eq!(det.steps[0].description, "R'2 = R2 - 3*R1");
        assert_eq!(det.steps[0].matrix, vec![vec![1.0, 2.0], vec![0.0, -2.0]]);
    }
}
