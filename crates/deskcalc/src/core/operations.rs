//! Binary and unary arithmetic
//!
//! All results pass through a finiteness check so that an overflowing square
//! or an enormous product surfaces as an error instead of `inf` on screen.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operators accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Every operator, in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Internal character stored in the total expression
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Glyph shown on the keypad and in the total display
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parses an internal operator character
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns true if `ch` is one of the internal operator characters
    #[must_use]
    pub const fn is_symbol(ch: char) -> bool {
        Self::from_symbol(ch).is_some()
    }

    /// Precedence level (higher binds tighter)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Multiply and divide may not open an expression
    #[must_use]
    pub const fn may_lead(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

/// Single-operand transforms applied to the current entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// x²
    Square,
    /// √x
    SquareRoot,
    /// x / 100
    Percent,
    /// 1 / x
    Reciprocal,
    /// -x
    Negate,
}

impl UnaryOp {
    /// Every unary operation, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Percent,
        Self::Reciprocal,
        Self::Square,
        Self::SquareRoot,
        Self::Negate,
    ];

    /// Keypad label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Square => "x²",
            Self::SquareRoot => "√x",
            Self::Percent => "%",
            Self::Reciprocal => "1/x",
            Self::Negate => "±",
        }
    }

    /// Applies the transform to `value`
    pub fn apply(self, value: f64) -> CalcResult<f64> {
        match self {
            Self::Square => Calculator::multiply(value, value),
            Self::SquareRoot => Calculator::square_root(value),
            Self::Percent => Calculator::divide(value, 100.0),
            Self::Reciprocal => Calculator::divide(1.0, value),
            Self::Negate => Calculator::multiply(value, -1.0),
        }
    }
}

/// Checked arithmetic primitives
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Performs a binary operation on two operands
    pub fn calculate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_overflow(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_overflow(a / b)
    }

    /// Square root, undefined for negative operands
    pub fn square_root(a: f64) -> CalcResult<f64> {
        if a < 0.0 {
            return Err(CalcError::InvalidOperand(format!(
                "square root of negative number {a}"
            )));
        }
        Self::check_overflow(a.sqrt())
    }

    fn check_overflow(result: f64) -> CalcResult<f64> {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}
