//! Inverse-matrix method: x = A⁻¹·b

use linsolve_core::{
    Matrix, Vector, Solution, TraceEvent, MethodKind, LinsolveError,
    check_system,
};
use crate::{determinant, inverse};
use crate::guard::{finite_solution, require_invertible};

/// Solve Ax = b by building A⁻¹ and multiplying it with b
pub fn solve_by_inverse(a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError> {
    check_system(a, b)?;

    let mut trace = vec![TraceEvent::Title { method: MethodKind::Inverse }];

    let det = determinant(a);
    trace.push(TraceEvent::DeterminantComputed { method: MethodKind::Inverse, value: det });
    require_invertible(det, LinsolveError::singular_system_det())?;

    trace.push(TraceEvent::InversionStarted);
    let inv = inverse(a)?;

    let x = inv.mul_vector(b)?;
    trace.push(TraceEvent::InverseEquation);
    trace.push(TraceEvent::SolutionFollows);

    Ok(Solution {
        variables: finite_solution(x.to_vec())?,
        trace,
        determinant: Some(det),
        method: MethodKind::Inverse,
    })
}
