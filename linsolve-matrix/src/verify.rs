//! Substitution check: plug the solution back into Ax = b

use linsolve_core::{Matrix, Vector, LinsolveError, check_system};
use nalgebra::{DMatrix, DVector};
use serde::Serialize;

/// Default acceptance threshold for `Verification::passes_default`
pub const VERIFY_TOLERANCE: f64 = 1e-6;

/// Residuals of a candidate solution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verification {
    /// r = A·x − b, one entry per equation
    pub residuals: Vec<f64>,
    /// max |r_i|
    pub max_abs: f64,
}

impl Verification {
    pub fn passes(&self, tolerance: f64) -> bool {
        self.max_abs <= tolerance
    }

    pub fn passes_default(&self) -> bool {
        self.passes(VERIFY_TOLERANCE)
    }
}

/// Convert to nalgebra for the residual product
pub fn to_dmatrix(m: &Matrix) -> DMatrix<f64> {
    let n = m.size();
    DMatrix::from_fn(n, n, |i, j| m.rows()[i][j])
}

/// Compute A·x − b for a candidate solution `x`
pub fn verify(a: &Matrix, b: &Vector, x: &[f64]) -> Result<Verification, LinsolveError> {
    check_system(a, b)?;
    if x.len() != a.size() {
        return Err(LinsolveError::dimension_mismatch(format!(
            "solution has {} values, system has {} unknowns",
            x.len(), a.size()
        )));
    }

    let r = to_dmatrix(a) * DVector::from_column_slice(x) - DVector::from_column_slice(b.as_slice());
    let residuals: Vec<f64> = r.iter().copied().collect();
    let max_abs = residuals.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));

    Ok(Verification { residuals, max_abs })
}
