//! Dense matrix type shared by the engines

use std::fmt;

use gauss_core::GaussError;
use nalgebra::DMatrix;

/// Tolerance for the elementwise symmetry check.
const SYMMETRY_TOL: f64 = 1e-9;

/// A dense m×n matrix of `f64`, mutable in place.
///
/// Dimensions never change once constructed; every engine in this crate
/// preserves the shape of the matrix it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Build a matrix from nested rows.
    ///
    /// Rejects empty data and ragged rows with `InvalidShape`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GaussError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GaussError::InvalidShape("matrix data is empty".to_string()));
        }
        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GaussError::InvalidShape(format!(
                    "row {} has {} entries, expected {}",
                    i + 1,
                    row.len(),
                    cols
                )));
            }
        }
        let nrows = rows.len();
        let data = DMatrix::from_row_iterator(nrows, cols, rows.into_iter().flatten());
        Ok(Self { data })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Elementwise symmetry check: `|a[i][j] - a[j][i]| <= tol` for every
    /// entry, ANDed over the whole matrix. False for rectangular shapes.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows();
        (0..n).all(|i| (0..n).all(|j| (self.data[(i, j)] - self.data[(j, i)]).abs() <= SYMMETRY_TOL))
    }

    /// Get element at (row, col), 0-based.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows() && col < self.cols() {
            Some(self.data[(row, col)])
        } else {
            None
        }
    }

    /// Convert to nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.data[(i, j)]).collect())
            .collect()
    }

    pub(crate) fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut DMatrix<f64> {
        &mut self.data
    }
}

/// Format an entry the way the console shows it: rounded to two decimals,
/// trailing zeros dropped.
pub(crate) fn fmt_entry(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0" from tiny negative residues.
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows() {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", fmt_entry(self.data[(i, j)]))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_row_major() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(1, 0), Some(4.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert!(matches!(
            Matrix::from_rows(vec![]),
            Err(GaussError::InvalidShape(_))
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![]]),
            Err(GaussError::InvalidShape(_))
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(GaussError::InvalidShape(_))
        ));
    }

    #[test]
    fn symmetry_is_elementwise() {
        let sym = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
        assert!(sym.is_symmetric());

        let asym = Matrix::from_rows(vec![vec![2.0, 1.0], vec![0.0, 2.0]]).unwrap();
        assert!(!asym.is_symmetric());

        let rect = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert!(!rect.is_symmetric());
    }

    #[test]
    fn display_rounds_to_two_decimals() {
        let m = Matrix::from_rows(vec![vec![1.0, -0.5], vec![1.0 / 3.0, 2.0]]).unwrap();
        assert_eq!(m.to_string(), "1\t-0.5\n0.33\t2");
    }

    #[test]
    fn fmt_entry_never_prints_negative_zero() {
        assert_eq!(fmt_entry(-0.0001), "0");
        assert_eq!(fmt_entry(0.0), "0");
        assert_eq!(fmt_entry(-1.5), "-1.5");
    }
}
