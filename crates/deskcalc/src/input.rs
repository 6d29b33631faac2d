//! Input events and key bindings
//!
//! Every keypad button and every bound key resolves to one [`InputEvent`];
//! [`crate::engine::ExpressionEngine::apply`] is the single place events are
//! dispatched.

use thiserror::Error;

use crate::core::{Operation, UnaryOp};

/// A discrete user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
    /// Binary operator
    Operator(Operation),
    /// Evaluate the expression (= or Enter)
    Evaluate,
    /// Reset both buffers
    Clear,
    /// Remove the last character of the current entry
    Backspace,
    /// Transform the current entry
    Unary(UnaryOp),
}

impl InputEvent {
    /// Maps a key character to its event
    #[must_use]
    pub fn from_key(ch: char) -> Option<Self> {
        if let Some(d) = ch.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = Operation::from_symbol(ch) {
            return Some(Self::Operator(op));
        }
        let event = match ch {
            '.' => Self::Point,
            '×' => Self::Operator(Operation::Multiply),
            '÷' => Self::Operator(Operation::Divide),
            '−' => Self::Operator(Operation::Subtract),
            '=' | '\n' | '\r' => Self::Evaluate,
            'c' | 'C' => Self::Clear,
            'b' | '\u{8}' | '\u{7f}' => Self::Backspace,
            '%' => Self::Unary(UnaryOp::Percent),
            's' => Self::Unary(UnaryOp::Square),
            'r' => Self::Unary(UnaryOp::SquareRoot),
            'i' => Self::Unary(UnaryOp::Reciprocal),
            'n' => Self::Unary(UnaryOp::Negate),
            _ => return None,
        };
        Some(event)
    }

    /// Label shown on the keypad button for this event
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".into(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Evaluate => "=".into(),
            Self::Clear => "C".into(),
            Self::Backspace => "⌫".into(),
            Self::Unary(kind) => kind.label().into(),
        }
    }
}

/// Key bindings listed in help text, `(key, description)`
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("0-9 .", "Enter operand"),
    ("+ - * /", "Operator"),
    ("= Enter", "Evaluate"),
    ("Bksp b", "Backspace"),
    ("Esc c", "Clear"),
    ("%", "Percent"),
    ("s", "Square"),
    ("r", "Square root"),
    ("i", "Reciprocal"),
    ("n", "Negate"),
];

/// A character in a key sequence with no binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no key binding for '{key}' at position {position}")]
pub struct UnknownKey {
    /// The unbound character
    pub key: char,
    /// Character index within the sequence
    pub position: usize,
}

/// Converts a key sequence into events, skipping spaces.
pub fn parse_key_sequence(keys: &str) -> Result<Vec<InputEvent>, UnknownKey> {
    keys.chars()
        .enumerate()
        .filter(|(_, ch)| *ch != ' ')
        .map(|(position, key)| InputEvent::from_key(key).ok_or(UnknownKey { key, position }))
        .collect()
}
