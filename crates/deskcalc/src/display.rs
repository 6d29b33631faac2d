//! Display rendering for the two calculator lines
//!
//! These are pure transforms over engine state; nothing here mutates.

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// Characters of the current entry shown by default
pub const DEFAULT_DISPLAY_WIDTH: usize = 11;

/// Renders the total expression with operator glyphs padded by spaces.
///
/// Every operator character is substituted, including the sign of a negated
/// operand, so `5+-4` renders as `5 +  − 4`.
#[must_use]
pub fn total_display(total: &str) -> String {
    let mut out = String::with_capacity(total.len() * 2);
    for ch in total.chars() {
        match Operation::from_symbol(ch) {
            Some(op) => {
                out.push(' ');
                out.push(op.glyph());
                out.push(' ');
            }
            None => out.push(ch),
        }
    }
    out
}

/// Renders the first `width` characters of the current entry.
///
/// Long values are clipped, not rounded.
#[must_use]
pub fn current_display(current: &str, width: usize) -> String {
    current.chars().take(width).collect()
}

/// Both display lines at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Rendered total expression
    pub total: String,
    /// Rendered (clipped) current entry
    pub current: String,
    /// Full status message when the current entry is an error state
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,
}
