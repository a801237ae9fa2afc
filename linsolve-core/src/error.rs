//! Structured solver errors
//!
//! Errors are values. Every failure carries a machine-readable code, a
//! human-readable message and, where useful, a suggestion the front end can
//! show next to the message.

use crate::EntryError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const SINGULAR_MATRIX: &str = "SINGULAR_MATRIX";
    pub const SINGULAR_SYSTEM: &str = "SINGULAR_SYSTEM";
    pub const INVALID_METHOD: &str = "INVALID_METHOD";
    pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
    pub const EMPTY_SYSTEM: &str = "EMPTY_SYSTEM";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const UNSUPPORTED_SIZE: &str = "UNSUPPORTED_SIZE";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
}

/// Context about where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Solving method that raised the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Pivot column (0-based) where elimination stopped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_column: Option<usize>,

    /// Free-form notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured error returned by every fallible operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinsolveError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl LinsolveError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: record the method that failed
    pub fn in_method(mut self, method: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.method = Some(method.into());
        self
    }

    /// Builder: record the pivot column that failed
    pub fn at_pivot(mut self, column: usize) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.pivot_column = Some(column);
        self
    }

    /// Builder: add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// True for the "unsolvable system" family: singular input or an
    /// unknown method.
    pub fn is_unsolvable(&self) -> bool {
        matches!(
            self.code.as_str(),
            codes::SINGULAR_MATRIX | codes::SINGULAR_SYSTEM | codes::INVALID_METHOD
        )
    }

    // ========== Common Error Constructors ==========

    pub fn singular_matrix() -> Self {
        Self::new(codes::SINGULAR_MATRIX, "matrix is not invertible")
            .with_suggestion("Check that no row is a combination of the others")
    }

    /// Singular system detected through its determinant (inverse, Cramer)
    pub fn singular_system_det() -> Self {
        Self::new(codes::SINGULAR_SYSTEM, "system has no unique solution, determinant = 0")
            .with_suggestion("Fix the coefficients so the equations are independent")
    }

    /// Singular system detected through a vanishing pivot (Gauss-Jordan)
    pub fn singular_system() -> Self {
        Self::new(codes::SINGULAR_SYSTEM, "system has no unique solution")
            .with_suggestion("Fix the coefficients so the equations are independent")
    }

    pub fn invalid_method(name: &str) -> Self {
        Self::new(codes::INVALID_METHOD, format!("invalid method: {}", name))
            .with_suggestion("Use one of: inverse, cramer, gauss-jordan")
    }

    pub fn dimension_mismatch(details: impl Into<String>) -> Self {
        Self::new(codes::DIMENSION_MISMATCH, format!("dimension mismatch: {}", details.into()))
    }

    pub fn empty_system() -> Self {
        Self::new(codes::EMPTY_SYSTEM, "system has no equations")
            .with_suggestion("Enter at least one equation")
    }

    pub fn non_finite(row: usize, col: usize) -> Self {
        Self::new(
            codes::NON_FINITE,
            format!("entry [{}][{}] is not a finite number", row, col),
        )
    }

    /// A solved value overflowed `f64`
    pub fn non_finite_solution(variable: usize) -> Self {
        Self::new(
            codes::NON_FINITE,
            format!("x{} is not a finite number", variable + 1),
        )
        .with_suggestion("Scale the equations so the values stay within floating-point range")
    }

    pub fn unsupported_size(size: usize, min: usize, max: usize) -> Self {
        Self::new(
            codes::UNSUPPORTED_SIZE,
            format!("system size {} is outside the supported range {}..={}", size, min, max),
        )
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("parse error: {}", details.into()))
            .with_suggestion("Enter plain decimal numbers such as 2, -1.5 or 3e2")
    }
}

impl std::fmt::Display for LinsolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for LinsolveError {}

impl From<EntryError> for LinsolveError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::Invalid(s) => Self::parse_error(format!("'{}' is not a number", s)),
            EntryError::NonFinite(s) => Self::parse_error(format!("'{}' is not finite", s)),
        }
    }
}
