//! deskcalc - a keypad calculator engine with a terminal front end
//!
//! The [`engine::ExpressionEngine`] holds two buffers: a committed `total`
//! expression and the `current` entry. Digits, operators and unary
//! transforms mutate them one [`input::InputEvent`] at a time; evaluating
//! parses `total + current` with standard precedence and leaves the result
//! (or a status such as "Can't divide by zero") in `current`.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut engine = ExpressionEngine::new();
//! for event in parse_key_sequence("2+3*4").unwrap() {
//!     engine.apply(event);
//! }
//! assert_eq!(engine.total_display(), "2 + 3 × ");
//!
//! engine.apply(InputEvent::Evaluate);
//! assert_eq!(engine.current_text(), "14");
//! assert_eq!(engine.total(), "");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod display;
pub mod driver;
pub mod engine;
pub mod input;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub mod cli;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, Verbosity};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Calculator, Operation, UnaryOp};
    pub use crate::display::{DisplaySnapshot, DEFAULT_DISPLAY_WIDTH};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::engine::{Entry, ExpressionEngine};
    pub use crate::input::{parse_key_sequence, InputEvent, UnknownKey};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let result = Evaluator::new().evaluate_str("2+3").unwrap();
        assert_eq!(result, 5.0);
    }

    #[test]
    fn test_engine_round_trip() {
        let mut engine = ExpressionEngine::new();
        for event in parse_key_sequence("9/3-1=").unwrap() {
            engine.apply(event);
        }
        assert_eq!(engine.current(), &Entry::Operand("2".into()));
        assert_eq!(
            engine.snapshot(DEFAULT_DISPLAY_WIDTH),
            DisplaySnapshot {
                total: String::new(),
                current: "2".into(),
                status: None,
            }
        );
    }

    #[test]
    fn test_error_handling() {
        assert!(matches!(
            Evaluator::new().evaluate_str("1/0"),
            Err(CalcError::DivisionByZero)
        ));
        assert!(matches!(
            Evaluator::new().evaluate_str(""),
            Err(CalcError::EmptyExpression)
        ));
        assert!(matches!(
            Evaluator::new().evaluate_str("1++"),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_calculator_direct() {
        assert_eq!(
            Calculator::calculate(6.0, 7.0, Operation::Multiply).unwrap(),
            42.0
        );
    }
}
