//! Property-based tests for the expression engine

#![allow(clippy::unwrap_used)]

use deskcalc::core::{Operation, UnaryOp};
use deskcalc::display::{current_display, DEFAULT_DISPLAY_WIDTH};
use deskcalc::engine::{Entry, ExpressionEngine};
use deskcalc::input::InputEvent;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn unary_strategy() -> impl Strategy<Value = UnaryOp> {
    prop_oneof![
        Just(UnaryOp::Percent),
        Just(UnaryOp::Reciprocal),
        Just(UnaryOp::Square),
        Just(UnaryOp::SquareRoot),
        Just(UnaryOp::Negate),
    ]
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => (0u8..=9).prop_map(InputEvent::Digit),
        1 => Just(InputEvent::Point),
        2 => operation_strategy().prop_map(InputEvent::Operator),
        1 => Just(InputEvent::Evaluate),
        1 => Just(InputEvent::Clear),
        1 => Just(InputEvent::Backspace),
        1 => unary_strategy().prop_map(InputEvent::Unary),
    ]
}

fn entry_events() -> impl Strategy<Value = Vec<InputEvent>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0u8..=9).prop_map(InputEvent::Digit),
            1 => Just(InputEvent::Point),
            1 => Just(InputEvent::Backspace),
        ],
        0..20,
    )
}

fn run(events: &[InputEvent]) -> ExpressionEngine {
    let mut engine = ExpressionEngine::new();
    for event in events {
        engine.apply(*event);
    }
    engine
}

// ===== Invariants over arbitrary input =====

proptest! {
    /// The current operand never holds more than one decimal point
    #[test]
    fn prop_at_most_one_point(events in prop::collection::vec(event_strategy(), 0..40)) {
        let engine = run(&events);
        if let Entry::Operand(text) = engine.current() {
            prop_assert!(text.matches('.').count() <= 1);
        }
    }

    /// Operators never remain in the current entry
    #[test]
    fn prop_no_operator_in_current(events in prop::collection::vec(event_strategy(), 0..40)) {
        let engine = run(&events);
        if let Entry::Operand(text) = engine.current() {
            // A leading minus from negation or a negative result is a sign
            let body = text.strip_prefix('-').unwrap_or(text);
            prop_assert!(!body.chars().any(Operation::is_symbol), "current = {text:?}");
        }
    }

    /// The total never ends in two operators, and never starts with * or /
    #[test]
    fn prop_total_well_formed(events in prop::collection::vec(event_strategy(), 0..40)) {
        let engine = run(&events);
        let total = engine.total();
        prop_assert!(!total.starts_with('*') && !total.starts_with('/'));
        let chars: Vec<char> = total.chars().collect();
        if chars.len() >= 2 {
            let last_two = &chars[chars.len() - 2..];
            prop_assert!(
                !(Operation::is_symbol(last_two[0]) && Operation::is_symbol(last_two[1])),
                "total = {total:?}"
            );
        }
    }

    /// Total is empty after every evaluation
    #[test]
    fn prop_evaluate_clears_total(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut engine = run(&events);
        engine.apply(InputEvent::Evaluate);
        prop_assert_eq!(engine.total(), "");
    }

    /// Clear is idempotent and resets to the initial state
    #[test]
    fn prop_clear_idempotent(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut engine = run(&events);
        engine.apply(InputEvent::Clear);
        let once = engine.clone();
        engine.apply(InputEvent::Clear);
        prop_assert_eq!(&engine, &once);
        prop_assert_eq!(engine, ExpressionEngine::new());
    }

    /// The current display never exceeds its width
    #[test]
    fn prop_current_display_width(
        events in prop::collection::vec(event_strategy(), 0..40),
        width in 1usize..30,
    ) {
        let engine = run(&events);
        let shown = engine.current_display(width);
        prop_assert!(shown.chars().count() <= width);
        prop_assert!(engine.current_text().starts_with(&shown));
    }
}

// ===== Sign handling =====

proptest! {
    /// Erasing every digit of a negated operand never leaves a sign to commit
    #[test]
    fn prop_erased_sign_never_commits(
        digits in "[1-9][0-9]{0,6}",
        op in operation_strategy(),
    ) {
        let mut engine = ExpressionEngine::new();
        for ch in digits.chars() {
            engine.add_digit_or_point(ch);
        }
        engine.apply(InputEvent::Unary(UnaryOp::Negate));
        for _ in 0..digits.len() {
            engine.apply(InputEvent::Backspace);
        }
        prop_assert!(engine.current().is_empty());
        engine.append_operator(op);
        prop_assert!(engine.total().chars().count() <= 1, "total = {:?}", engine.total());
    }
}

#[test]
fn negate_backspace_operator_commits_single_operator() {
    let engine = run(&[
        InputEvent::Digit(4),
        InputEvent::Unary(UnaryOp::Negate),
        InputEvent::Backspace,
        InputEvent::Operator(Operation::Add),
    ]);
    assert_eq!(engine.total(), "+");
    assert_eq!(engine.current(), &Entry::default());
}

// ===== Operand entry =====

proptest! {
    /// Typed digits and points concatenate with later points dropped
    #[test]
    fn prop_entry_matches_model(events in entry_events()) {
        let engine = run(&events);
        let mut model = String::new();
        for event in &events {
            match event {
                InputEvent::Digit(d) => model.push(char::from(b'0' + d)),
                InputEvent::Point if !model.contains('.') => model.push('.'),
                InputEvent::Backspace => {
                    model.pop();
                }
                _ => {}
            }
        }
        prop_assert_eq!(engine.current(), &Entry::Operand(model));
        prop_assert_eq!(engine.total(), "");
    }

    /// Backspace removes exactly one trailing character
    #[test]
    fn prop_backspace_removes_last(digits in "[0-9]{1,12}") {
        let mut engine = ExpressionEngine::from_parts("", Entry::Operand(digits.clone()));
        engine.apply(InputEvent::Backspace);
        prop_assert_eq!(engine.current_text(), &digits[..digits.len() - 1]);
    }

    /// Current display shows the first characters of long entries
    #[test]
    fn prop_display_truncates(digits in "[1-9][0-9]{0,24}") {
        let engine = ExpressionEngine::from_parts("", Entry::Operand(digits.clone()));
        let expected: String = digits.chars().take(DEFAULT_DISPLAY_WIDTH).collect();
        prop_assert_eq!(engine.current_display(DEFAULT_DISPLAY_WIDTH), expected.clone());
        prop_assert_eq!(current_display(&digits, DEFAULT_DISPLAY_WIDTH), expected);
    }
}

// ===== Evaluation =====

proptest! {
    /// a op b = matches direct f64 arithmetic
    #[test]
    fn prop_binary_evaluation(a in 0u32..10_000, b in 1u32..10_000, op in operation_strategy()) {
        let mut engine = run(&[]);
        for ch in a.to_string().chars() {
            engine.add_digit_or_point(ch);
        }
        engine.append_operator(op);
        for ch in b.to_string().chars() {
            engine.add_digit_or_point(ch);
        }
        engine.evaluate();

        let (a, b) = (f64::from(a), f64::from(b));
        let expected = match op {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        };
        let shown: f64 = engine.current_text().parse().unwrap();
        prop_assert_eq!(shown, expected);
    }

    /// Dividing by a typed zero always yields the divide-by-zero status
    #[test]
    fn prop_divide_by_zero(a in 0u32..1_000_000) {
        let mut engine = ExpressionEngine::from_parts(format!("{a}/"), Entry::Operand("0".into()));
        engine.evaluate();
        prop_assert_eq!(engine.current(), &Entry::DivideByZero);
    }

    /// Negating twice restores the value
    #[test]
    fn prop_double_negate(a in 1u32..1_000_000) {
        let text = a.to_string();
        let mut engine = ExpressionEngine::from_parts("", Entry::Operand(text.clone()));
        engine.apply(InputEvent::Unary(UnaryOp::Negate));
        prop_assert_eq!(engine.current_text(), format!("-{text}"));
        engine.apply(InputEvent::Unary(UnaryOp::Negate));
        prop_assert_eq!(engine.current_text(), text);
    }

    /// Unary operations never touch the total
    #[test]
    fn prop_unary_keeps_total(a in 0u32..1000, kind in unary_strategy()) {
        let mut engine = ExpressionEngine::from_parts("3+", Entry::Operand(a.to_string()));
        engine.apply(InputEvent::Unary(kind));
        prop_assert_eq!(engine.total(), "3+");
    }
}
