//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::layout;
use crate::config::CalcConfig;
use crate::engine::ExpressionEngine;
use crate::input::InputEvent;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: ExpressionEngine,
    keypad: Keypad,
    config: CalcConfig,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app with the given configuration
    #[must_use]
    pub fn with_config(config: CalcConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the expression engine
    #[must_use]
    pub fn engine(&self) -> &ExpressionEngine {
        &self.engine
    }

    /// Returns the keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Highlights the matching button and feeds the event to the engine
    pub fn apply(&mut self, event: InputEvent) {
        self.keypad.highlight(event);
        self.engine.apply(event);
    }

    /// Handles a key action, returning true when the app should quit
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Input(event) => self.apply(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        self.should_quit
    }

    /// Presses the keypad button under `(x, y)` in a frame of size `area`.
    ///
    /// Returns the event fired, or `None` when the click missed every button.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> Option<InputEvent> {
        let keypad_area = layout(area).keypad;
        let index = self.keypad.hit_test(keypad_area, x, y)?;
        let event = self.keypad.get_button(index)?.event;
        debug!(?event, x, y, "keypad click");
        self.apply(event);
        Some(event)
    }

    /// Total expression as displayed
    #[must_use]
    pub fn total_display(&self) -> String {
        self.engine.total_display()
    }

    /// Current entry as displayed at the configured width
    #[must_use]
    pub fn current_display(&self) -> String {
        self.engine.current_display(self.config.display_width)
    }

    /// Full status message when the current entry is a status
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        let current = self.engine.current();
        current.is_status().then(|| current.text())
    }
}
