//! Step narrator: renders trace events as human-readable lines
//!
//! Algorithms only record `TraceEvent`s. Wording, number formatting and
//! language are decided here.

use serde::{Deserialize, Serialize};
use crate::{fixed, fixed_width, MethodKind, TraceEvent};

/// Decimals used for scalar values in narration
pub const VALUE_DECIMALS: usize = 4;
/// Decimals used inside augmented-matrix snapshots
pub const MATRIX_DECIMALS: usize = 3;
/// Field width of one augmented-matrix cell
pub const MATRIX_CELL_WIDTH: usize = 8;

/// Narration language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "es" | "spanish" | "español" | "espanol" => Some(Language::Spanish),
            _ => None,
        }
    }
}

/// Renders trace events in one language
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator {
    pub language: Language,
}

impl Narrator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Full title of a method
    pub fn title(&self, method: MethodKind) -> &'static str {
        match (self.language, method) {
            (Language::English, MethodKind::Inverse) => "Inverse Matrix Method",
            (Language::English, MethodKind::Cramer) => "Cramer's Rule",
            (Language::English, MethodKind::GaussJordan) => "Gauss-Jordan Method",
            (Language::Spanish, MethodKind::Inverse) => "Método de la Matriz Inversa",
            (Language::Spanish, MethodKind::Cramer) => "Método de Cramer",
            (Language::Spanish, MethodKind::GaussJordan) => "Método de Gauss-Jordan",
        }
    }

    /// Render one event as a single line (snapshots span several lines)
    pub fn narrate(&self, event: &TraceEvent) -> String {
        let es = self.language == Language::Spanish;
        match event {
            TraceEvent::Title { method } => self.title(*method).to_string(),
            TraceEvent::DeterminantComputed { method, value } => {
                let value = fixed(*value, VALUE_DECIMALS);
                match (es, method) {
                    (false, _) => format!("Det(A) = {}", value),
                    (true, MethodKind::Cramer) => format!("Determinante principal = {}", value),
                    (true, _) => format!("Determinante de A = {}", value),
                }
            }
            TraceEvent::InversionStarted => {
                if es { "Calculando A^(-1)...".to_string() } else { "Computing A⁻¹...".to_string() }
            }
            TraceEvent::InverseEquation => {
                if es { "x = A^(-1) * b".to_string() } else { "x = A⁻¹·b".to_string() }
            }
            TraceEvent::SolutionFollows => {
                if es { "Solución encontrada:".to_string() } else { "Solution found:".to_string() }
            }
            TraceEvent::CramerRatio { variable, numerator, denominator, value } => {
                let (num, den, val) = (
                    fixed(*numerator, VALUE_DECIMALS),
                    fixed(*denominator, VALUE_DECIMALS),
                    fixed(*value, VALUE_DECIMALS),
                );
                let i = variable + 1;
                if es {
                    format!("x{i} = Det(A{i}) / Det(A) = {} / {} = {}", num, den, val, i = i)
                } else {
                    format!("x{i} = Det(A{i})/Det(A) = {}/{} = {}", num, den, val, i = i)
                }
            }
            TraceEvent::AugmentedMatrixHeader => {
                if es {
                    "Matriz aumentada inicial:".to_string()
                } else {
                    "Initial augmented matrix:".to_string()
                }
            }
            TraceEvent::MatrixSnapshot { rows } => format_augmented(rows),
            TraceEvent::RowSwapped { first, second } => {
                if es {
                    format!("Intercambiando filas {} y {}", first + 1, second + 1)
                } else {
                    format!("Swapping rows {} and {}", first + 1, second + 1)
                }
            }
            TraceEvent::RowScaled { row, divisor } => {
                if es {
                    format!("Dividiendo fila {} por {}", row + 1, fixed(*divisor, VALUE_DECIMALS))
                } else {
                    format!("Dividing row {} by {}", row + 1, fixed(*divisor, VALUE_DECIMALS))
                }
            }
            TraceEvent::RowEliminated { target, pivot_row, factor } => format!(
                "F{k} = F{k} - {} * F{i}",
                fixed(*factor, VALUE_DECIMALS),
                k = target + 1,
                i = pivot_row + 1,
            ),
        }
    }
}

/// `[ v1 v2 ... ]` per row, each value right-aligned in 8 characters with
/// 3 decimals, rows joined by newlines
pub fn format_augmented(rows: &[Vec<f64>]) -> String {
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row.iter()
                .map(|&v| fixed_width(v, MATRIX_CELL_WIDTH, MATRIX_DECIMALS))
                .collect();
            format!("[ {} ]", cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str("EN"), Some(Language::English));
        assert_eq!(Language::from_str("es"), Some(Language::Spanish));
        assert_eq!(Language::from_str("fr"), None);
    }

    #[test]
    fn test_format_augmented() {
        let rows = vec![vec![2.0, 1.0, -1.0, 8.0], vec![-3.0, -1.0, 2.0, -11.0]];
        assert_eq!(
            format_augmented(&rows),
            "[    2.000    1.000   -1.000    8.000 ]\n[   -3.000   -1.000    2.000  -11.000 ]"
        );
    }

    #[test]
    fn test_narrate_english() {
        let n = Narrator::default();
        assert_eq!(n.narrate(&TraceEvent::Title { method: MethodKind::Cramer }), "Cramer's Rule");
        assert_eq!(
            n.narrate(&TraceEvent::DeterminantComputed { method: MethodKind::Cramer, value: 1.0 }),
            "Det(A) = 1.0000"
        );
        assert_eq!(n.narrate(&TraceEvent::InverseEquation), "x = A⁻¹·b");
        assert_eq!(
            n.narrate(&TraceEvent::CramerRatio { variable: 0, numerator: 2.0, denominator: 1.0, value: 2.0 }),
            "x1 = Det(A1)/Det(A) = 2.0000/1.0000 = 2.0000"
        );
        assert_eq!(n.narrate(&TraceEvent::RowSwapped { first: 0, second: 1 }), "Swapping rows 1 and 2");
        assert_eq!(n.narrate(&TraceEvent::RowScaled { row: 0, divisor: -3.0 }), "Dividing row 1 by -3.0000");
        assert_eq!(
            n.narrate(&TraceEvent::RowEliminated { target: 1, pivot_row: 0, factor: 2.0 }),
            "F2 = F2 - 2.0000 * F1"
        );
    }

    #[test]
    fn test_narrate_spanish() {
        let n = Narrator::new(Language::Spanish);
        assert_eq!(
            n.narrate(&TraceEvent::Title { method: MethodKind::GaussJordan }),
            "Método de Gauss-Jordan"
        );
        assert_eq!(n.narrate(&TraceEvent::RowSwapped { first: 0, second: 2 }), "Intercambiando filas 1 y 3");
        assert_eq!(n.narrate(&TraceEvent::SolutionFollows), "Solución encontrada:");
        assert_eq!(
            n.narrate(&TraceEvent::DeterminantComputed { method: MethodKind::Inverse, value: -5.0 }),
            "Determinante de A = -5.0000"
        );
        assert_eq!(
            n.narrate(&TraceEvent::DeterminantComputed { method: MethodKind::Cramer, value: -5.0 }),
            "Determinante principal = -5.0000"
        );
        assert_eq!(n.narrate(&TraceEvent::InversionStarted), "Calculando A^(-1)...");
        assert_eq!(n.narrate(&TraceEvent::InverseEquation), "x = A^(-1) * b");
        assert_eq!(
            n.narrate(&TraceEvent::CramerRatio { variable: 1, numerator: -5.0, denominator: -5.0, value: 1.0 }),
            "x2 = Det(A2) / Det(A) = -5.0000 / -5.0000 = 1.0000"
        );
        assert_eq!(
            n.narrate(&TraceEvent::RowScaled { row: 0, divisor: 2.0 }),
            "Dividiendo fila 1 por 2.0000"
        );
    }
}
