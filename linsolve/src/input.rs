//! Form-style system input
//!
//! Entries arrive as text, exactly as typed. Lenient parsing counts
//! anything that does not start with a number as zero; strict parsing
//! rejects it and names the offending cell.

use linsolve_core::{Matrix, Vector, LinsolveError, EntryError, parse_entry, parse_entry_strict};
use serde::{Deserialize, Serialize};

/// A system as entered in a form: one text cell per coefficient/constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInput {
    pub coefficients: Vec<Vec<String>>,
    pub constants: Vec<String>,
}

impl SystemInput {
    /// n×n system of zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            coefficients: vec![vec!["0".to_string(); n]; n],
            constants: vec!["0".to_string(); n],
        }
    }

    /// Build from numbers (e.g. JSON input)
    pub fn from_numbers(coefficients: &[Vec<f64>], constants: &[f64]) -> Self {
        Self {
            coefficients: coefficients.iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
            constants: constants.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Number of equations
    pub fn size(&self) -> usize {
        self.constants.len()
    }

    /// Resize to n×n, keeping overlapping entries and padding with "0".
    /// Empty entries are also reset to "0".
    pub fn resize(&mut self, n: usize) {
        let cell = |s: Option<&String>| match s {
            Some(s) if !s.is_empty() => s.clone(),
            _ => "0".to_string(),
        };

        self.coefficients = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| cell(self.coefficients.get(i).and_then(|row| row.get(j))))
                    .collect()
            })
            .collect();
        self.constants = (0..n).map(|i| cell(self.constants.get(i))).collect();
    }

    /// Parse every entry leniently and validate the shape
    pub fn to_system(&self) -> Result<(Matrix, Vector), LinsolveError> {
        self.parse_with(|s| Ok(parse_entry(s)))
    }

    /// Parse every entry strictly: each cell must be blank or a finite number
    pub fn to_system_strict(&self) -> Result<(Matrix, Vector), LinsolveError> {
        self.parse_with(parse_entry_strict)
    }

    fn parse_with<F>(&self, parse: F) -> Result<(Matrix, Vector), LinsolveError>
    where
        F: Fn(&str) -> Result<f64, EntryError>,
    {
        if self.coefficients.is_empty() || self.constants.is_empty() {
            return Err(LinsolveError::empty_system());
        }
        if self.coefficients.len() != self.constants.len() {
            return Err(LinsolveError::dimension_mismatch(format!(
                "{} coefficient rows but {} constants",
                self.coefficients.len(), self.constants.len()
            )));
        }

        let rows = self.coefficients.iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, s)| {
                        parse(s.as_str()).map_err(|e| LinsolveError::from(e)
                            .with_note(format!("coefficient row {}, column {}", i + 1, j + 1)))
                    })
                    .collect::<Result<Vec<f64>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let constants = self.constants.iter()
            .enumerate()
            .map(|(i, s)| {
                parse(s.as_str()).map_err(|e| LinsolveError::from(e)
                    .with_note(format!("constant of equation {}", i + 1)))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let a = Matrix::from_rows(rows)?;
        let b = Vector::new(constants)?;
        Ok((a, b))
    }

    /// One line per equation, e.g. `2x1 + 1x2 - 1x3 = 8`
    pub fn equation_preview(&self) -> Vec<String> {
        self.coefficients.iter()
            .zip(&self.constants)
            .map(|(row, constant)| {
                let mut line = String::new();
                for (col, coeff) in row.iter().enumerate() {
                    let value = parse_entry(coeff);
                    if col == 0 {
                        line.push_str(coeff);
                    } else if value < 0.0 {
                        line.push_str(&format!(" - {}", value.abs()));
                    } else {
                        line.push_str(&format!(" + {}", coeff));
                    }
                    line.push_str(&format!("x{}", col + 1));
                }
                format!("{} = {}", line, constant)
            })
            .collect()
    }
}

fn texts<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Built-in example system for sizes 2, 3 and 4
pub fn example_system(n: usize) -> Option<SystemInput> {
    match n {
        2 => Some(SystemInput {
            coefficients: vec![texts(["2", "3"]), texts(["1", "-1"])],
            constants: texts(["7", "1"]),
        }),
        3 => Some(SystemInput {
            coefficients: vec![
                texts(["2", "1", "-1"]),
                texts(["-3", "-1", "2"]),
                texts(["-2", "1", "2"]),
            ],
            constants: texts(["8", "-11", "-3"]),
        }),
        4 => Some(SystemInput {
            coefficients: vec![
                texts(["1", "2", "-1", "3"]),
                texts(["2", "-1", "1", "1"]),
                texts(["1", "1", "1", "1"]),
                texts(["3", "1", "2", "-1"]),
            ],
            constants: texts(["6", "5", "4", "8"]),
        }),
        _ => None,
    }
}
