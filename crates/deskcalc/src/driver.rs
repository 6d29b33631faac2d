//! Unified calculator driver
//!
//! A scenario written against [`CalculatorDriver`] runs unchanged against
//! the bare engine and against the TUI application, so the front end cannot
//! drift from the engine's rules.

use crate::config::CalcConfig;
use crate::display::DisplaySnapshot;
use crate::engine::ExpressionEngine;
use crate::input::{parse_key_sequence, InputEvent, UnknownKey};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Delivers one input event
    fn press(&mut self, event: InputEvent);

    /// Rendered total expression
    fn total_display(&self) -> String;

    /// Rendered current entry
    fn current_display(&self) -> String;

    /// Full status message, if the current entry is a status
    fn status(&self) -> Option<String>;

    /// Delivers every event bound to the characters of `keys`
    fn press_keys(&mut self, keys: &str) -> Result<(), UnknownKey> {
        for event in parse_key_sequence(keys)? {
            self.press(event);
        }
        Ok(())
    }

    /// Both display lines at once
    fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            total: self.total_display(),
            current: self.current_display(),
            status: self.status(),
        }
    }
}

/// Driver over the engine alone
#[derive(Debug, Clone, Default)]
pub struct HeadlessDriver {
    engine: ExpressionEngine,
    config: CalcConfig,
}

impl HeadlessDriver {
    /// Creates a headless driver with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a headless driver with the given configuration
    #[must_use]
    pub fn with_config(config: CalcConfig) -> Self {
        Self {
            engine: ExpressionEngine::new(),
            config,
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, event: InputEvent) {
        self.engine.apply(event);
    }

    fn total_display(&self) -> String {
        self.engine.total_display()
    }

    fn current_display(&self) -> String {
        self.engine.current_display(self.config.display_width)
    }

    fn status(&self) -> Option<String> {
        self.engine.snapshot(self.config.display_width).status
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, InputEvent};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the TUI application state
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) {
            self.app.apply(event);
        }

        fn total_display(&self) -> String {
            self.app.total_display()
        }

        fn current_display(&self) -> String {
            self.app.current_display()
        }

        fn status(&self) -> Option<String> {
            self.app.status_message().map(str::to_string)
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

fn run_keys<D: CalculatorDriver>(driver: &mut D, keys: &str) {
    driver.press(InputEvent::Clear);
    let result = driver.press_keys(keys);
    assert!(result.is_ok(), "scenario keys {keys:?} are unbound: {result:?}");
}

/// Verifies entry of operands and the decimal-point rule
pub fn verify_operand_entry<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "3.1");
    assert_eq!(driver.current_display(), "3.1");

    run_keys(driver, "3.1.");
    assert_eq!(driver.current_display(), "3.1");

    run_keys(driver, "12b");
    assert_eq!(driver.current_display(), "1");

    run_keys(driver, "b");
    assert_eq!(driver.current_display(), "");
}

/// Verifies commit and rejection of operators
pub fn verify_operators<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "*");
    assert_eq!(driver.total_display(), "");
    assert_eq!(driver.current_display(), "");

    run_keys(driver, "7+");
    assert_eq!(driver.total_display(), "7 + ");
    assert_eq!(driver.current_display(), "");

    run_keys(driver, "7+/");
    assert_eq!(driver.total_display(), "7 + ");
}

/// Verifies evaluation results and statuses
pub fn verify_evaluation<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "7+3=");
    assert_eq!(driver.current_display(), "10");
    assert_eq!(driver.total_display(), "");

    run_keys(driver, "2+3*4=");
    assert_eq!(driver.current_display(), "14");

    run_keys(driver, "8/0=");
    assert_eq!(driver.status().as_deref(), Some("Can't divide by zero"));
    assert_eq!(driver.total_display(), "");

    run_keys(driver, "5+=");
    assert_eq!(driver.current_display(), "Error");
    assert_eq!(driver.total_display(), "");
}

/// Verifies the unary operations
pub fn verify_unary_operations<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "4n");
    assert_eq!(driver.current_display(), "-4");

    run_keys(driver, "4.5n");
    assert_eq!(driver.current_display(), "-4.5");

    run_keys(driver, "9nr");
    assert_eq!(driver.current_display(), "Error");

    run_keys(driver, "0i");
    assert_eq!(driver.status().as_deref(), Some("Can't divide by zero"));

    run_keys(driver, "50%");
    assert_eq!(driver.current_display(), "0.5");

    run_keys(driver, "12s");
    assert_eq!(driver.current_display(), "144");
}

/// Verifies display clipping and clear idempotence
pub fn verify_display<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "123456789012");
    assert_eq!(driver.current_display(), "12345678901");

    run_keys(driver, "5+6");
    driver.press(InputEvent::Clear);
    let once = driver.snapshot();
    driver.press(InputEvent::Clear);
    assert_eq!(driver.snapshot(), once);
    assert_eq!(once, DisplaySnapshot::default());
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_operand_entry(driver);
    verify_operators(driver);
    verify_evaluation(driver);
    verify_unary_operations(driver);
    verify_display(driver);
}
