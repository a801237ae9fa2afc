//! Linsolve - Step-by-step solver for small square linear systems

mod input;
mod render;

pub use input::{SystemInput, example_system};
pub use render::Renderer;

pub use linsolve_core::{
    Matrix, Vector, Solution, TraceEvent, MethodKind, Language, Narrator,
    LinsolveError, codes,
};
pub use linsolve_matrix::Verification;

use linsolve_plugin::{MethodMeta, MethodRegistry};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, info};

/// Smallest system the form accepts by default
pub const DEFAULT_MIN_SIZE: usize = 2;
/// Largest system the form accepts by default
pub const DEFAULT_MAX_SIZE: usize = 4;

/// A solved system ready for display
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub solution: Solution,
    pub verification: Verification,
    /// Narrated steps in the engine's language
    pub steps: Vec<String>,
    pub markdown: String,
}

/// Main Linsolve engine
#[derive(Clone)]
pub struct Linsolve {
    registry: Arc<MethodRegistry>,
    language: Language,
    min_size: usize,
    max_size: usize,
    strict_entries: bool,
}

impl Linsolve {
    pub fn new(registry: MethodRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            language: Language::default(),
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            strict_entries: false,
        }
    }

    pub fn with_standard_methods() -> Self {
        Self::new(linsolve_matrix::standard_registry())
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Accepted system sizes for `solve_input`; the engine itself takes any n ≥ 1
    pub fn with_size_limits(mut self, min: usize, max: usize) -> Self {
        self.min_size = min.max(1);
        self.max_size = max.max(self.min_size);
        self
    }

    /// Reject entries that are not plain numbers instead of reading them as 0
    pub fn with_strict_entries(mut self, strict: bool) -> Self {
        self.strict_entries = strict;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn size_limits(&self) -> (usize, usize) {
        (self.min_size, self.max_size)
    }

    pub fn narrator(&self) -> Narrator {
        Narrator::new(self.language)
    }

    /// Solve a validated system with the named method
    pub fn solve(&self, method: &str, a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError> {
        debug!(method, size = a.size(), "solving system");
        match self.registry.solve(method, a, b) {
            Ok(solution) => {
                debug!(method = %solution.method, steps = solution.trace.len(), "solved");
                Ok(solution)
            }
            Err(e) => {
                info!(method, code = %e.code, "solve failed: {}", e.message);
                Err(e)
            }
        }
    }

    /// Parse form input, solve it, verify the result and render a report
    pub fn solve_input(&self, method: &str, input: &SystemInput) -> Result<Report, LinsolveError> {
        let n = input.size();
        if n != 0 && (n < self.min_size || n > self.max_size) {
            return Err(LinsolveError::unsupported_size(n, self.min_size, self.max_size));
        }

        let (a, b) = if self.strict_entries {
            input.to_system_strict()?
        } else {
            input.to_system()?
        };
        let solution = self.solve(method, &a, &b)?;
        let verification = linsolve_matrix::verify(&a, &b, &solution.variables)?;

        let renderer = Renderer::new(self.narrator());
        Ok(Report {
            steps: solution.steps(&self.narrator()),
            markdown: renderer.render(&solution, Some(&verification)),
            solution,
            verification,
        })
    }

    /// Render an error in the engine's language
    pub fn render_error(&self, error: &LinsolveError) -> String {
        Renderer::new(self.narrator()).render_error(error)
    }

    pub fn help(&self, name: Option<&str>) -> Result<JsonValue, LinsolveError> {
        self.registry.help(name)
    }

    pub fn list_methods(&self) -> Vec<MethodMeta> {
        self.registry.list_methods()
    }
}

impl Default for Linsolve {
    fn default() -> Self {
        Self::with_standard_methods()
    }
}
