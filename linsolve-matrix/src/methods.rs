//! Registry adapters for the three solving methods

use linsolve_core::{Matrix, Vector, Solution, LinsolveError};
use linsolve_plugin::{SolverPlugin, MethodMeta};
use crate::{solve_by_inverse, solve_by_cramer, solve_by_gauss_jordan};

// ============================================================================
// INVERSE - x = A⁻¹·b
// ============================================================================

pub struct InverseFn;

static INVERSE_ALIASES: [&str; 3] = ["inversa", "matrix-inverse", "inverse-matrix"];
static INVERSE_RELATED: [&str; 2] = ["cramer", "gauss-jordan"];

impl SolverPlugin for InverseFn {
    fn meta(&self) -> MethodMeta {
        MethodMeta {
            name: "inverse",
            label: "Inverse Matrix",
            description: "Build A⁻¹ from the adjugate and multiply it with b",
            aliases: &INVERSE_ALIASES,
            produces_determinant: true,
            complexity: "O(n!) cofactor expansion",
            related: &INVERSE_RELATED,
        }
    }

    fn solve(&self, a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError> {
        solve_by_inverse(a, b)
    }
}

// ============================================================================
// CRAMER - x_i = det(A_i) / det(A)
// ============================================================================

pub struct CramerFn;

static CRAMER_ALIASES: [&str; 1] = ["cramers-rule"];
static CRAMER_RELATED: [&str; 2] = ["inverse", "gauss-jordan"];

impl SolverPlugin for CramerFn {
    fn meta(&self) -> MethodMeta {
        MethodMeta {
            name: "cramer",
            label: "Cramer",
            description: "Divide det(A_i), A with column i replaced by b, by det(A)",
            aliases: &CRAMER_ALIASES,
            produces_determinant: true,
            complexity: "O(n·n!) cofactor expansion",
            related: &CRAMER_RELATED,
        }
    }

    fn solve(&self, a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError> {
        solve_by_cramer(a, b)
    }
}

// ============================================================================
// GAUSS_JORDAN - row reduction of [A | b]
// ============================================================================

pub struct GaussJordanFn;

static GAUSS_JORDAN_ALIASES: [&str; 2] = ["gaussjordan", "gauss"];
static GAUSS_JORDAN_RELATED: [&str; 2] = ["inverse", "cramer"];

impl SolverPlugin for GaussJordanFn {
    fn meta(&self) -> MethodMeta {
        MethodMeta {
            name: "gauss-jordan",
            label: "Gauss-Jordan",
            description: "Reduce the augmented matrix [A | b] with partial pivoting",
            aliases: &GAUSS_JORDAN_ALIASES,
            produces_determinant: false,
            complexity: "O(n³)",
            related: &GAUSS_JORDAN_RELATED,
        }
    }

    fn solve(&self, a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError> {
        solve_by_gauss_jordan(a, b)
    }
}
