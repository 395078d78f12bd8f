//! Narration records emitted by the engines

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::fmt_entry;

/// One narrated sub-step: the symbolic row operation performed and a
/// snapshot of the matrix after it.
///
/// In congruence mode the description carries a second line for the
/// mirrored column operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub description: String,
    pub matrix: Vec<Vec<f64>>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        for (i, row) in self.matrix.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|&v| fmt_entry(v)).collect();
            write!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_description_then_snapshot() {
        let step = Step {
            description: "R1 <-> R2".to_string(),
            matrix: vec![vec![1.0, 2.0], vec![0.0, 1.0]],
        };
        assert_eq!(step.to_string(), "R1 <-> R2\n1\t2\n0\t1");
    }
}
