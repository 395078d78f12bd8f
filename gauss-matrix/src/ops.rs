//! Elementary row and congruence operations
//!
//! The operator holds its matrix and applies one operation per call,
//! returning a narrated [`Step`]. Row indices are 1-based in the
//! descriptor, matching the textbook vocabulary used at the prompt, and
//! are translated to 0-based internally.

use gauss_core::{parse_scalar, GaussError};
use serde::{Deserialize, Serialize};

use crate::step::Step;
use crate::types::Matrix;

/// Operating mode for the elementary operator.
///
/// Congruence mode mirrors every row operation onto the matching column
/// pair and requires a square, symmetric matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Row,
    Congruence,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Row
    }
}

impl Mode {
    pub fn parse(s: &str) -> Result<Self, GaussError> {
        match s.to_lowercase().as_str() {
            "row" => Ok(Mode::Row),
            "congruence" => Ok(Mode::Congruence),
            _ => Err(GaussError::InvalidMode(s.to_string())),
        }
    }
}

/// One elementary operation, with 1-based row indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ElementaryOp {
    /// row target <- row target + scalar * row source
    AddScaledRow { scalar: f64, source: usize, target: usize },
    /// row <- scalar * row
    ScaleRow { row: usize, scalar: f64 },
    /// exchange two rows
    SwapRows { first: usize, second: usize },
}

impl ElementaryOp {
    /// Build a descriptor from whitespace-delimited tokens.
    ///
    /// The first token is the operation code:
    /// - `1 c j i`: add c times row j to row i
    /// - `2 i c`: multiply row i by c
    /// - `3 i j`: interchange rows i and j
    ///
    /// A mixed-number scalar ("-1 1/2") spans two tokens; the extra token
    /// is recognized by count and rejoined before parsing.
    pub fn parse(tokens: &[&str]) -> Result<Self, GaussError> {
        match tokens {
            [] => Err(GaussError::InvalidOperation("empty input".to_string())),
            ["1", rest @ ..] => {
                let (scalar, rest) = leading_scalar(rest, 2, "1 c j i")?;
                Ok(ElementaryOp::AddScaledRow {
                    scalar,
                    source: parse_index(rest[0])?,
                    target: parse_index(rest[1])?,
                })
            }
            ["2", rest @ ..] => {
                if rest.len() < 2 || rest.len() > 3 {
                    return Err(usage("2 i c"));
                }
                Ok(ElementaryOp::ScaleRow {
                    row: parse_index(rest[0])?,
                    scalar: joined_scalar(&rest[1..])?,
                })
            }
            ["3", i, j] => Ok(ElementaryOp::SwapRows {
                first: parse_index(i)?,
                second: parse_index(j)?,
            }),
            ["3", ..] => Err(usage("3 i j")),
            [code, ..] => Err(GaussError::InvalidOperation(format!(
                "unknown operation code {code:?} (expected 1, 2 or 3)"
            ))),
        }
    }

    /// Symbolic description of the operation, e.g. `R'2 = R2 + 0.5*R1`.
    /// Congruence mode adds a second line for the mirrored column step.
    fn describe(&self, mode: Mode) -> String {
        match *self {
            ElementaryOp::AddScaledRow { scalar, source, target } => {
                let mut s = format!("R'{target} = R{target} + {scalar}*R{source}");
                if mode == Mode::Congruence {
                    s.push_str(&format!("\nC'{target} = C{target} + {scalar}*C{source}"));
                }
                s
            }
            ElementaryOp::ScaleRow { row, scalar } => {
                let mut s = format!("R'{row} = {scalar}*R{row}");
                if mode == Mode::Congruence {
                    s.push_str(&format!("\nC'{row} = {scalar}*C{row}"));
                }
                s
            }
            ElementaryOp::SwapRows { first, second } => {
                let mut s = format!("R{first} <-> R{second}");
                if mode == Mode::Congruence {
                    s.push_str(&format!("\nC{first} <-> C{second}"));
                }
                s
            }
        }
    }

    fn indices(&self) -> [usize; 2] {
        match *self {
            ElementaryOp::AddScaledRow { source, target, .. } => [source, target],
            ElementaryOp::ScaleRow { row, .. } => [row, row],
            ElementaryOp::SwapRows { first, second } => [first, second],
        }
    }
}

/// Scalar at the head of `rest`, possibly spanning two tokens, followed by
/// exactly `trailing` more tokens.
fn leading_scalar<'a>(
    rest: &'a [&'a str],
    trailing: usize,
    usage_hint: &str,
) -> Result<(f64, &'a [&'a str]), GaussError> {
    if rest.len() == trailing + 1 {
        Ok((parse_scalar(rest[0])?, &rest[1..]))
    } else if rest.len() == trailing + 2 {
        Ok((joined_scalar(&rest[..2])?, &rest[2..]))
    } else {
        Err(usage(usage_hint))
    }
}

fn joined_scalar(parts: &[&str]) -> Result<f64, GaussError> {
    match parts {
        [single] => parse_scalar(single),
        [whole, frac] => parse_scalar(&format!("{whole} {frac}")),
        _ => Err(GaussError::Parse(parts.join(" "))),
    }
}

fn parse_index(token: &str) -> Result<usize, GaussError> {
    token
        .parse::<usize>()
        .map_err(|_| GaussError::Parse(token.to_string()))
}

fn usage(hint: &str) -> GaussError {
    GaussError::InvalidOperation(format!("expected input of the form: {hint}"))
}

/// Applies elementary operations to a held matrix, one per call.
///
/// Effects accumulate: repeated `apply` calls keep mutating the same
/// matrix. The operator is the single owner of its matrix; callers that
/// share one across threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct Operator {
    matrix: Matrix,
    mode: Mode,
    verbose: bool,
}

impl Operator {
    /// Congruence mode requires a square, symmetric matrix; anything else
    /// is `InvalidShape`. Row mode accepts any shape.
    pub fn new(matrix: Matrix, mode: Mode, verbose: bool) -> Result<Self, GaussError> {
        if mode == Mode::Congruence {
            if !matrix.is_square() {
                return Err(GaussError::InvalidShape(format!(
                    "congruence operations need a square matrix, got {}x{}",
                    matrix.rows(),
                    matrix.cols()
                )));
            }
            if !matrix.is_symmetric() {
                return Err(GaussError::InvalidShape(
                    "congruence operations need a symmetric matrix".to_string(),
                ));
            }
        }
        Ok(Self { matrix, mode, verbose })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Apply one operation in place and return the narrated step.
    ///
    /// In congruence mode the row operation runs first and the mirrored
    /// column operation is then applied to the already-updated matrix;
    /// the sequential order is what makes the combined effect equal
    /// E·A·Eᵀ. A failed call leaves the matrix untouched.
    pub fn apply(&mut self, op: &ElementaryOp) -> Result<Step, GaussError> {
        let rows = self.matrix.rows();
        for index in op.indices() {
            if index < 1 || index > rows {
                return Err(GaussError::IndexOutOfRange { index, rows });
            }
        }

        match *op {
            ElementaryOp::AddScaledRow { scalar, source, target } => {
                self.add_scaled_row(scalar, source - 1, target - 1);
                if self.mode == Mode::Congruence {
                    self.add_scaled_col(scalar, source - 1, target - 1);
                }
            }
            ElementaryOp::ScaleRow { row, scalar } => {
                self.scale_row(scalar, row - 1);
                if self.mode == Mode::Congruence {
                    self.scale_col(scalar, row - 1);
                }
            }
            ElementaryOp::SwapRows { first, second } => {
                self.matrix.data_mut().swap_rows(first - 1, second - 1);
                if self.mode == Mode::Congruence {
                    self.matrix.data_mut().swap_columns(first - 1, second - 1);
                }
            }
        }

        Ok(Step {
            description: op.describe(self.mode),
            matrix: self.matrix.to_rows(),
        })
    }

    fn add_scaled_row(&mut self, c: f64, source: usize, target: usize) {
        let data = self.matrix.data_mut();
        for k in 0..data.ncols() {
            data[(target, k)] += c * data[(source, k)];
        }
    }

    fn add_scaled_col(&mut self, c: f64, source: usize, target: usize) {
        let data = self.matrix.data_mut();
        for k in 0..data.nrows() {
            data[(k, target)] += c * data[(k, source)];
        }
    }

    fn scale_row(&mut self, c: f64, row: usize) {
        let data = self.matrix.data_mut();
        for k in 0..data.ncols() {
            data[(row, k)] *= c;
        }
    }

    fn scale_col(&mut self, c: f64, col: usize) {
        let data = self.matrix.data_mut();
        for k in 0..data.nrows() {
            data[(k, col)] *= c;
        }
    }
}
