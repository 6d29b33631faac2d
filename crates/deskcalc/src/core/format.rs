//! Operand parsing and result rendering

use crate::core::{CalcError, CalcResult};

/// Renders a value the way the current display shows results.
///
/// Uses the shortest decimal form that round-trips, never exponent
/// notation. Whole numbers carry no fractional part and negative zero
/// renders as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Parses the text of an operand entry.
///
/// Accepts an optional leading `-`, decimal digits and at most one `.`, with
/// at least one digit. Anything else (including `inf`, exponents and the
/// empty string) is an [`CalcError::InvalidOperand`].
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    let invalid = || CalcError::InvalidOperand(format!("'{text}'"));

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let has_digit = unsigned.chars().any(|c| c.is_ascii_digit());
    let points = unsigned.chars().filter(|&c| c == '.').count();
    let well_formed = unsigned.chars().all(|c| c.is_ascii_digit() || c == '.');

    if !has_digit || points > 1 || !well_formed {
        return Err(invalid());
    }

    text.parse().map_err(|_| invalid())
}
