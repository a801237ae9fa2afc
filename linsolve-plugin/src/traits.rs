//! Plugin traits

use linsolve_core::{Matrix, Vector, Solution, LinsolveError};
use serde::Serialize;

/// Metadata for a solving method
#[derive(Debug, Clone, Serialize)]
pub struct MethodMeta {
    /// Dispatch identifier, e.g. `"gauss-jordan"`
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Alternative identifiers accepted by the registry
    pub aliases: &'static [&'static str],
    /// Whether the returned `Solution` carries det(A)
    pub produces_determinant: bool,
    pub complexity: &'static str,
    pub related: &'static [&'static str],
}

/// A method that solves a square system Ax = b
pub trait SolverPlugin: Send + Sync {
    fn meta(&self) -> MethodMeta;
    fn solve(&self, a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError>;
}
