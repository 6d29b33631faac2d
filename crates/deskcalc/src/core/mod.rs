//! Arithmetic core: operators, tokenizer/parser, evaluator and number rendering
//!
//! Everything here is pure. The [`crate::engine`] module owns the mutable
//! calculator state and maps [`CalcError`] onto user-visible statuses.

pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;

pub use operations::{Calculator, Operation, UnaryOp};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Operand text is not a number, or the operation is undefined for it
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
}

impl CalcError {
    /// Returns true for the error that gets its own status message
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}
