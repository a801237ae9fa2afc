//! Solve results and the structured derivation trace

use serde::{Deserialize, Serialize};
use crate::Narrator;

/// The three classical solving methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MethodKind {
    Inverse,
    Cramer,
    GaussJordan,
}

impl MethodKind {
    pub const ALL: [MethodKind; 3] = [MethodKind::Inverse, MethodKind::Cramer, MethodKind::GaussJordan];

    /// Stable identifier used for dispatch
    pub fn id(self) -> &'static str {
        match self {
            MethodKind::Inverse => "inverse",
            MethodKind::Cramer => "cramer",
            MethodKind::GaussJordan => "gauss-jordan",
        }
    }

    /// Short display label
    pub fn label(self) -> &'static str {
        match self {
            MethodKind::Inverse => "Inverse Matrix",
            MethodKind::Cramer => "Cramer",
            MethodKind::GaussJordan => "Gauss-Jordan",
        }
    }
}

impl std::fmt::Display for MethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One step of a derivation. Indices are 0-based; the narrator shows them
/// 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Method heading
    Title { method: MethodKind },
    /// Determinant of the coefficient matrix, as computed by `method`
    DeterminantComputed { method: MethodKind, value: f64 },
    /// Marker emitted right before the inverse is built
    InversionStarted,
    /// The symbolic equation x = A⁻¹·b
    InverseEquation,
    /// Marker preceding the final values
    SolutionFollows,
    /// One Cramer quotient: x_i = det(A_i) / det(A)
    CramerRatio {
        variable: usize,
        numerator: f64,
        denominator: f64,
        value: f64,
    },
    /// Heading before the first augmented-matrix snapshot
    AugmentedMatrixHeader,
    /// Full augmented matrix after a structural change
    MatrixSnapshot { rows: Vec<Vec<f64>> },
    /// Two rows exchanged during partial pivoting
    RowSwapped { first: usize, second: usize },
    /// Pivot row divided by its pivot
    RowScaled { row: usize, divisor: f64 },
    /// `target -= factor * pivot_row`
    RowEliminated {
        target: usize,
        pivot_row: usize,
        factor: f64,
    },
}

/// Result of one solve call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// `variables[i]` is the value of x_{i+1}
    pub variables: Vec<f64>,
    /// Ordered derivation trace
    pub trace: Vec<TraceEvent>,
    /// det(A) for the inverse and Cramer methods
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub determinant: Option<f64>,
    pub method: MethodKind,
}

impl Solution {
    /// Human-readable derivation, one string per trace event
    pub fn steps(&self, narrator: &Narrator) -> Vec<String> {
        self.trace.iter().map(|e| narrator.narrate(e)).collect()
    }

    /// Number of row swaps performed (Gauss-Jordan only)
    pub fn swap_count(&self) -> usize {
        self.trace.iter()
            .filter(|e| matches!(e, TraceEvent::RowSwapped { .. }))
            .count()
    }
}
