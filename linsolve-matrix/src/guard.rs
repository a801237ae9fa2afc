//! Singularity and overflow checks shared by the solvers

use linsolve_core::{is_degenerate, LinsolveError};

/// Fail with `error` when `det` cannot be divided by. An overflowed
/// determinant is noted in the error context.
pub(crate) fn require_invertible(det: f64, error: LinsolveError) -> Result<(), LinsolveError> {
    if !is_degenerate(det) {
        return Ok(());
    }
    if det.is_finite() {
        Err(error)
    } else {
        Err(error.with_note("determinant is not a finite number"))
    }
}

/// Reject a solution with any value outside `f64` range
pub(crate) fn finite_solution(variables: Vec<f64>) -> Result<Vec<f64>, LinsolveError> {
    match variables.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(LinsolveError::non_finite_solution(i)),
        None => Ok(variables),
    }
}
