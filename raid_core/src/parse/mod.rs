//! Input parsing - Free-text counter entry to numbers
//!
//! Players type counters the way the game shows them: `1,200`, `500k`,
//! `1.5M`. Parsing never fails; anything unusable degrades to zero.

mod float;

pub use float::parse_float_prefix;

/// Multiplier applied for the `k` suffix
pub const THOUSAND: f64 = 1_000.0;
/// Multiplier applied for the `m` suffix
pub const MILLION: f64 = 1_000_000.0;

/// Parse one numeric entry, honouring `k`/`m` shorthand and `,` separators
///
/// The cleaned text must look like `[0-9.]+` with at most one trailing unit
/// letter for the shorthand to apply. Anything else falls back to the longest
/// decimal prefix (`"5km"` is `5`, `"abc"` is `0`).
///
/// # Returns
/// A finite, non-negative value
pub fn parse_numeric_entry(raw: &str) -> f64 {
    if raw.trim().is_empty() {
        return 0.0;
    }

    let cleaned = raw.to_lowercase().trim().replace(',', "");

    let value = match split_unit(&cleaned) {
        Some((number, multiplier)) => match parse_float_prefix(number) {
            Some(n) => n * multiplier,
            None => 0.0,
        },
        None => parse_float_prefix(&cleaned).unwrap_or(0.0),
    };

    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Split `"1.5m"` into `("1.5", 1e6)`; `None` unless the whole text matches
fn split_unit(cleaned: &str) -> Option<(&str, f64)> {
    let (number, multiplier) = if let Some(rest) = cleaned.strip_suffix('k') {
        (rest, THOUSAND)
    } else if let Some(rest) = cleaned.strip_suffix('m') {
        (rest, MILLION)
    } else {
        (cleaned, 1.0)
    };

    let well_formed = !number.is_empty()
        && number.bytes().all(|b| b.is_ascii_digit() || b == b'.');

    well_formed.then_some((number, multiplier))
}
