//! Server configuration
//!
//! Read once at startup from environment variables. Invalid values are
//! logged and replaced by their defaults so a typo never stops the server.

use linsolve::{Language, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use std::env;
use tracing::warn;

/// Method used when a `solve` call names none
pub const DEFAULT_METHOD: &str = "gauss-jordan";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `LINSOLVE_LANG`
    pub language: Language,
    /// `LINSOLVE_MIN_SIZE`
    pub min_size: usize,
    /// `LINSOLVE_MAX_SIZE`
    pub max_size: usize,
    /// `LINSOLVE_DEFAULT_METHOD`
    pub default_method: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            default_method: DEFAULT_METHOD.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("LINSOLVE_LANG") {
            match Language::from_str(&raw) {
                Some(language) => config.language = language,
                None => warn!(value = %raw, "unknown LINSOLVE_LANG, using English"),
            }
        }

        config.min_size = size_var(&lookup, "LINSOLVE_MIN_SIZE", config.min_size);
        config.max_size = size_var(&lookup, "LINSOLVE_MAX_SIZE", config.max_size);
        if config.max_size < config.min_size {
            warn!(
                min = config.min_size,
                max = config.max_size,
                "LINSOLVE_MAX_SIZE below LINSOLVE_MIN_SIZE, using the minimum for both"
            );
            config.max_size = config.min_size;
        }

        if let Some(method) = lookup("LINSOLVE_DEFAULT_METHOD") {
            let method = method.trim();
            if !method.is_empty() {
                config.default_method = method.to_string();
            }
        }

        config
    }
}

fn size_var<F>(lookup: &F, key: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => {
                warn!(key, value = %raw, default, "invalid size, using default");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]);
        assert_eq!(c, ServerConfig::default());
        assert_eq!(c.language, Language::English);
        assert_eq!((c.min_size, c.max_size), (2, 4));
        assert_eq!(c.default_method, "gauss-jordan");
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("LINSOLVE_LANG", "es"),
            ("LINSOLVE_MIN_SIZE", "1"),
            ("LINSOLVE_MAX_SIZE", " 6 "),
            ("LINSOLVE_DEFAULT_METHOD", "cramer"),
        ]);
        assert_eq!(c.language, Language::Spanish);
        assert_eq!((c.min_size, c.max_size), (1, 6));
        assert_eq!(c.default_method, "cramer");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let c = config(&[
            ("LINSOLVE_LANG", "fr"),
            ("LINSOLVE_MIN_SIZE", "zero"),
            ("LINSOLVE_MAX_SIZE", "0"),
            ("LINSOLVE_DEFAULT_METHOD", "   "),
        ]);
        assert_eq!(c, ServerConfig::default());
    }

    #[test]
    fn test_max_below_min() {
        let c = config(&[("LINSOLVE_MIN_SIZE", "3"), ("LINSOLVE_MAX_SIZE", "2")]);
        assert_eq!((c.min_size, c.max_size), (3, 3));
    }
}
