//! Method Registry

use crate::{SolverPlugin, MethodMeta};
use linsolve_core::{Matrix, Vector, Solution, LinsolveError};
use serde_json::{json, Value as JsonValue};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Canonical form of a method identifier: trimmed, lowercase, with `_` and
/// spaces folded into `-`
pub fn normalize_method_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Central method registry
pub struct MethodRegistry {
    methods: HashMap<String, Arc<dyn SolverPlugin>>,
    aliases: HashMap<String, String>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn with_method<M: SolverPlugin + 'static>(mut self, m: M) -> Self {
        let meta = m.meta();
        let name = normalize_method_name(meta.name);
        for alias in meta.aliases {
            self.aliases.insert(normalize_method_name(alias), name.clone());
        }
        self.methods.insert(name, Arc::new(m));
        self
    }

    /// Look up a method by identifier or alias
    pub fn get_method(&self, name: &str) -> Option<&dyn SolverPlugin> {
        let key = normalize_method_name(name);
        let key = self.aliases.get(&key).unwrap_or(&key);
        self.methods.get(key).map(|m| m.as_ref())
    }

    /// Registered identifiers, sorted
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Dispatch `name` to its solver
    pub fn solve(&self, name: &str, a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError> {
        match self.get_method(name) {
            Some(m) => m.solve(a, b).map_err(|e| e.in_method(m.meta().name)),
            None => {
                let similar = self.find_similar_methods(name);
                let mut err = LinsolveError::invalid_method(name);
                if similar.is_empty() {
                    err = err.with_suggestion(format!("Use one of: {}", self.method_names().join(", ")));
                } else {
                    err = err.with_suggestion(format!("Did you mean: {}?", similar.join(", ")));
                }
                Err(err)
            }
        }
    }

    /// Find method names similar to the given name (for error suggestions)
    fn find_similar_methods(&self, name: &str) -> Vec<String> {
        let query = normalize_method_name(name);
        let mut matches: Vec<(String, usize)> = self.methods.keys()
            .filter_map(|method| {
                let score = Self::similarity_score(&query, method);
                if score >= 20 {
                    Some((method.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, then alphabetical for a stable message
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Calculate similarity score between two strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        // Penalize length difference
        let len_diff = (query.len() as i32 - candidate.len() as i32).unsigned_abs() as usize;
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }

    /// Metadata of every registered method, sorted by name
    pub fn list_methods(&self) -> Vec<MethodMeta> {
        let mut metas: Vec<MethodMeta> = self.methods.values().map(|m| m.meta()).collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    pub fn help(&self, name: Option<&str>) -> Result<JsonValue, LinsolveError> {
        match name {
            Some(n) => self.help_for(n),
            None => Ok(self.general_help()),
        }
    }

    fn help_for(&self, name: &str) -> Result<JsonValue, LinsolveError> {
        let method = self.get_method(name).ok_or_else(|| LinsolveError::invalid_method(name))?;
        let meta = method.meta();
        Ok(json!({
            "name": meta.name,
            "label": meta.label,
            "description": meta.description,
            "aliases": meta.aliases,
            "produces_determinant": meta.produces_determinant,
            "complexity": meta.complexity,
            "related": meta.related,
            "usage": format!("solve(coefficients, constants, \"{}\")", meta.name),
        }))
    }

    fn general_help(&self) -> JsonValue {
        json!({
            "methods": self.method_names(),
            "usage": "Call help('method_name') for detailed help.",
        })
    }
}

impl Default for MethodRegistry {
    fn default() -> Self {
        Self::new()
    }
}
