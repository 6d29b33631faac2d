//! Expression engine: the two calculator buffers and every input operation
//!
//! `total` holds committed operand/operator text in entry order. `current`
//! holds the operand being typed, the last result, or a status. Each
//! operation mutates the buffers to completion; display text is derived on
//! demand by [`crate::display`].

use tracing::{debug, info};

use crate::core::evaluator::Evaluator;
use crate::core::format::{format_number, parse_operand};
use crate::core::{CalcError, CalcResult, Operation, UnaryOp};
use crate::display::{current_display, total_display, DisplaySnapshot};
use crate::input::InputEvent;

/// Message shown for a generic failure
pub const ERROR_MESSAGE: &str = "Error";
/// Message shown for division by zero
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Can't divide by zero";

/// Contents of the current entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Operand text, a result, or empty
    Operand(String),
    /// Malformed expression or undefined operation
    Error,
    /// Division by zero
    DivideByZero,
}

impl Default for Entry {
    fn default() -> Self {
        Self::Operand(String::new())
    }
}

impl Entry {
    /// Text of the entry as the display shows it
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Operand(text) => text,
            Self::Error => ERROR_MESSAGE,
            Self::DivideByZero => DIVIDE_BY_ZERO_MESSAGE,
        }
    }

    /// Returns true for the two status states
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Error | Self::DivideByZero)
    }

    /// Returns true for an empty operand
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Operand(text) if text.is_empty())
    }

    /// Converts a calculation outcome into an entry
    #[must_use]
    pub fn from_outcome(outcome: CalcResult<f64>) -> Self {
        match outcome {
            Ok(value) => Self::Operand(format_number(value)),
            Err(err) if err.is_division_by_zero() => Self::DivideByZero,
            Err(_) => Self::Error,
        }
    }
}

/// The calculator state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionEngine {
    total: String,
    current: Entry,
}

impl ExpressionEngine {
    /// Creates an engine with both buffers empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from raw buffer contents.
    ///
    /// No validation is applied; `total` may hold any text.
    #[must_use]
    pub fn from_parts(total: impl Into<String>, current: Entry) -> Self {
        Self {
            total: total.into(),
            current,
        }
    }

    /// Committed expression text
    #[must_use]
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Current entry
    #[must_use]
    pub fn current(&self) -> &Entry {
        &self.current
    }

    /// Current entry text, status messages included
    #[must_use]
    pub fn current_text(&self) -> &str {
        self.current.text()
    }

    /// Dispatches one input event
    pub fn apply(&mut self, event: InputEvent) {
        debug!(?event, "input");
        match event {
            InputEvent::Digit(d) => {
                if let Some(ch) = char::from_digit(u32::from(d), 10) {
                    self.add_digit_or_point(ch);
                }
            }
            InputEvent::Point => self.add_digit_or_point('.'),
            InputEvent::Operator(op) => self.append_operator(op),
            InputEvent::Evaluate => self.evaluate(),
            InputEvent::Clear => self.clear(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Unary(kind) => self.unary_op(kind),
        }
    }

    /// Appends a digit or the decimal point to the current operand.
    ///
    /// A status is discarded first. A second point is ignored. Characters
    /// other than ASCII digits and `.` are ignored.
    pub fn add_digit_or_point(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            debug!(%token, "ignored non-numeric token");
            return;
        }
        if self.current.is_status() {
            self.current = Entry::default();
        }
        if let Entry::Operand(text) = &mut self.current {
            if token == '.' && text.contains('.') {
                debug!("ignored second decimal point");
                return;
            }
            text.push(token);
        }
    }

    /// Commits the current operand and `op` onto the total.
    ///
    /// Rejected without mutation when it would lead the expression with
    /// `*` or `/`, or follow an operator already at the end of the total.
    pub fn append_operator(&mut self, op: Operation) {
        if self.current.is_status() {
            self.current = Entry::default();
        }

        let Entry::Operand(current) = &mut self.current else {
            return;
        };

        if current.is_empty() && self.total.is_empty() && !op.may_lead() {
            debug!(?op, "rejected leading operator");
            return;
        }
        let total_ends_with_operator = self
            .total
            .chars()
            .next_back()
            .is_some_and(Operation::is_symbol);
        if current.is_empty() && total_ends_with_operator {
            debug!(?op, "rejected consecutive operator");
            return;
        }

        current.push(op.symbol());
        self.total.push_str(current.as_str());
        current.clear();
    }

    /// Empties both buffers
    pub fn clear(&mut self) {
        self.total.clear();
        self.current = Entry::default();
    }

    /// Removes the last character of the current entry.
    ///
    /// A status is cleared entirely, and so is a sign left without digits.
    pub fn backspace(&mut self) {
        match &mut self.current {
            Entry::Operand(text) => {
                text.pop();
                if text == "-" {
                    text.clear();
                }
            }
            Entry::Error | Entry::DivideByZero => self.current = Entry::default(),
        }
    }

    /// Applies a single-operand transform to the current entry.
    ///
    /// An empty entry is left alone. A status, or text that does not parse
    /// as a number, becomes [`Entry::Error`]. The total is never touched.
    pub fn unary_op(&mut self, kind: UnaryOp) {
        let outcome = match &self.current {
            Entry::Operand(text) if text.is_empty() => {
                debug!(?kind, "unary operation on empty entry ignored");
                return;
            }
            Entry::Operand(text) => parse_operand(text).and_then(|value| kind.apply(value)),
            Entry::Error | Entry::DivideByZero => Err(CalcError::InvalidOperand(
                self.current.text().to_string(),
            )),
        };

        if let Err(err) = &outcome {
            info!(?kind, %err, "unary operation failed");
        }
        self.current = Entry::from_outcome(outcome);
    }

    /// Evaluates `total + current`.
    ///
    /// No-op when both are empty. Otherwise the total is always cleared and
    /// the current entry receives the result or a status.
    pub fn evaluate(&mut self) {
        let outcome = match &self.current {
            Entry::Operand(current) => {
                let expression = format!("{}{}", self.total, current);
                if expression.is_empty() {
                    return;
                }
                Self::evaluate_expression(&expression)
            }
            Entry::Error | Entry::DivideByZero => Err(CalcError::InvalidOperand(
                self.current.text().to_string(),
            )),
        };

        match &outcome {
            Ok(value) => debug!(total = %self.total, value, "evaluated"),
            Err(err) => info!(total = %self.total, %err, "evaluation failed"),
        }
        self.current = Entry::from_outcome(outcome);
        self.total.clear();
    }

    fn evaluate_expression(expression: &str) -> CalcResult<f64> {
        if expression.chars().next_back().is_some_and(Operation::is_symbol) {
            return Err(CalcError::ParseError(format!(
                "expression ends with an operator: '{expression}'"
            )));
        }
        Evaluator::new().evaluate_str(expression)
    }

    /// Total expression as displayed
    #[must_use]
    pub fn total_display(&self) -> String {
        total_display(&self.total)
    }

    /// Current entry as displayed, clipped to `width` characters
    #[must_use]
    pub fn current_display(&self, width: usize) -> String {
        current_display(self.current.text(), width)
    }

    /// Both display lines plus the unclipped status message, if any
    #[must_use]
    pub fn snapshot(&self, width: usize) -> DisplaySnapshot {
        DisplaySnapshot {
            total: self.total_display(),
            current: self.current_display(width),
            status: self
                .current
                .is_status()
                .then(|| self.current.text().to_string()),
        }
    }
}
