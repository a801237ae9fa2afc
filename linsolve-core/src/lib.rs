//! Linsolve Core - Fundamental types
//!
//! This crate provides the core types used throughout Linsolve:
//! - `Matrix` / `Vector`: validated square system input
//! - `Solution` / `TraceEvent`: solve results with a structured derivation
//! - `Narrator`: renders trace events as text (English or Spanish)
//! - `LinsolveError`: structured errors

mod number;
mod types;
mod solution;
mod narrate;
mod error;

pub use number::{
    EntryError, SINGULARITY_TOLERANCE,
    is_effectively_zero, is_degenerate, parse_entry, parse_entry_strict, fixed, fixed_width,
};
pub use types::{Matrix, Vector, check_system};
pub use solution::{MethodKind, Solution, TraceEvent};
pub use narrate::{Language, Narrator, format_augmented};
pub use error::{LinsolveError, ErrorContext, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Matrix, Vector, Solution, TraceEvent, MethodKind, LinsolveError};
    pub use crate::error::codes;
}
