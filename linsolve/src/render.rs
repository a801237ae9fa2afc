//! Markdown renderer
//!
//! Renders a solution (or an error) as a Markdown report: values table,
//! determinant, step-by-step derivation and the substitution check.

use linsolve_core::{fixed, Language, LinsolveError, Narrator, Solution};
use linsolve_matrix::Verification;

/// Decimals shown for solution values and the determinant
const REPORT_DECIMALS: usize = 4;

/// Report renderer
pub struct Renderer {
    narrator: Narrator,
}

struct Labels {
    solution: &'static str,
    variable: &'static str,
    value: &'static str,
    determinant: &'static str,
    steps: &'static str,
    verification: &'static str,
    max_residual: &'static str,
    passed: &'static str,
    failed: &'static str,
    error: &'static str,
}

static ENGLISH: Labels = Labels {
    solution: "Solution",
    variable: "variable",
    value: "value",
    determinant: "Determinant",
    steps: "Step by step",
    verification: "Verification",
    max_residual: "Largest residual |Ax - b|",
    passed: "substitution checks out",
    failed: "substitution does not check out",
    error: "Error",
};

static SPANISH: Labels = Labels {
    solution: "Solución",
    variable: "variable",
    value: "valor",
    determinant: "Determinante",
    steps: "Desarrollo paso a paso",
    verification: "Verificación",
    max_residual: "Mayor residuo |Ax - b|",
    passed: "la sustitución es correcta",
    failed: "la sustitución no es correcta",
    error: "Error",
};

impl Renderer {
    pub fn new(narrator: Narrator) -> Self {
        Self { narrator }
    }

    fn labels(&self) -> &'static Labels {
        match self.narrator.language {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH,
        }
    }

    /// Render a solution with an optional verification section
    pub fn render(&self, solution: &Solution, verification: Option<&Verification>) -> String {
        let labels = self.labels();
        let mut output = String::new();

        output.push_str(&format!(
            "## {} ({})\n\n",
            labels.solution,
            self.narrator.title(solution.method)
        ));

        output.push_str(&format!("| {} | {} |\n", labels.variable, labels.value));
        output.push_str("|----------|-------|\n");
        for (i, value) in solution.variables.iter().enumerate() {
            output.push_str(&format!("| x{} | {} |\n", i + 1, fixed(*value, REPORT_DECIMALS)));
        }
        output.push('\n');

        if let Some(det) = solution.determinant {
            output.push_str(&format!(
                "**{}:** {}\n\n",
                labels.determinant,
                fixed(det, REPORT_DECIMALS)
            ));
        }

        output.push_str(&format!("### {}\n\n```text\n", labels.steps));
        for step in solution.steps(&self.narrator) {
            output.push_str(&step);
            output.push('\n');
        }
        output.push_str("```\n");

        if let Some(v) = verification {
            output.push_str(&format!("\n### {}\n\n", labels.verification));
            output.push_str(&format!(
                "{}: {:.3e} ({})\n",
                labels.max_residual,
                v.max_abs,
                if v.passes_default() { labels.passed } else { labels.failed }
            ));
        }

        output
    }

    /// Render a failed solve
    pub fn render_error(&self, error: &LinsolveError) -> String {
        let mut output = format!("## {}\n\n{}\n", self.labels().error, error.message);
        if let Some(ref suggestion) = error.suggestion {
            output.push_str(&format!("\n> {}\n", suggestion));
        }
        output
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Narrator::default())
    }
}
