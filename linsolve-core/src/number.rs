//! Numeric helpers: tolerance, entry parsing and fixed-point formatting
//!
//! All solver arithmetic is plain `f64`. The one shared notion of "zero"
//! lives here so the three methods can never drift apart.

use thiserror::Error;

/// Absolute tolerance below which a determinant or pivot counts as zero
pub const SINGULARITY_TOLERANCE: f64 = 1e-10;

/// Error type for strict entry parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    #[error("Invalid number format: {0}")]
    Invalid(String),

    #[error("Not a finite number: {0}")]
    NonFinite(String),
}

/// True when `value` is within the singularity tolerance of zero.
/// NaN counts as zero: it only shows up when a determinant overflowed.
pub fn is_effectively_zero(value: f64) -> bool {
    !(value.abs() >= SINGULARITY_TOLERANCE)
}

/// True when a determinant or pivot cannot be divided by: effectively zero
/// or not finite
pub fn is_degenerate(value: f64) -> bool {
    is_effectively_zero(value) || value.is_infinite()
}

/// Parse a user entry the way a form field does: the longest numeric
/// prefix wins, and empty, invalid or zero-valued text becomes `0.0`.
///
/// `"2"` → 2, `" -1.5e1abc"` → -15, `""` → 0, `"abc"` → 0, `"-0"` → 0.
pub fn parse_entry(text: &str) -> f64 {
    match numeric_prefix(text.trim()) {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Parse a user entry strictly: the whole trimmed text must be a finite
/// number. Empty text is still zero.
pub fn parse_entry_strict(text: &str) -> Result<f64, EntryError> {
    let s = text.trim();
    if s.is_empty() {
        return Ok(0.0);
    }
    let v: f64 = s.parse().map_err(|_| EntryError::Invalid(s.to_string()))?;
    if !v.is_finite() {
        return Err(EntryError::NonFinite(s.to_string()));
    }
    Ok(v)
}

/// Longest prefix of `s` that reads as a decimal float
fn numeric_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Fixed-point rendering with `places` decimals; negative zero prints as zero
pub fn fixed(value: f64, places: usize) -> String {
    let v = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", places, v)
}

/// Fixed-point rendering right-aligned in a field of `width` characters
pub fn fixed_width(value: f64, width: usize, places: usize) -> String {
    format!("{:>width$}", fixed(value, places), width = width)
}
