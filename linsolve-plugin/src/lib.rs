//! Linsolve Plugin System
//!
//! Provides the `SolverPlugin` trait and the `MethodRegistry` that
//! dispatches a method identifier to its solver.

mod traits;
mod registry;

pub use traits::{SolverPlugin, MethodMeta};
pub use registry::{MethodRegistry, normalize_method_name};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{SolverPlugin, MethodMeta, MethodRegistry};
    pub use linsolve_core::prelude::*;
}
