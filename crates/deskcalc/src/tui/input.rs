//! Terminal input handling

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::input::InputEvent;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the calculator
    Input(InputEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        // Release and repeat events arrive on some platforms
        if event.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => InputEvent::from_key(c).map_or(KeyAction::None, KeyAction::Input),
            KeyCode::Enter => KeyAction::Input(InputEvent::Evaluate),
            KeyCode::Esc => KeyAction::Input(InputEvent::Clear),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Input(InputEvent::Backspace),
            _ => KeyAction::None,
        }
    }

    /// Returns the `(column, row)` of a left-button press
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> Option<(u16, u16)> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operation, UnaryOp};
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (d, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Input(InputEvent::Digit(d as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operation::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Input(InputEvent::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_unary_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('r'))),
            KeyAction::Input(InputEvent::Unary(UnaryOp::SquareRoot))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('n'))),
            KeyAction::Input(InputEvent::Unary(UnaryOp::Negate))
        );
    }

    #[test]
    fn test_handle_unbound_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('('))),
            KeyAction::None
        );
    }

    // ===== Command key tests =====

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Input(InputEvent::Evaluate)
        );
    }

    #[test]
    fn test_handle_escape() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Input(InputEvent::Clear)
        );
    }

    #[test]
    fn test_handle_backspace_and_delete() {
        let handler = InputHandler::new();
        for code in [KeyCode::Backspace, KeyCode::Delete] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Input(InputEvent::Backspace)
            );
        }
    }

    #[test]
    fn test_handle_unmapped_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Left)), KeyAction::None);
    }

    // ===== Quit tests =====

    #[test]
    fn test_handle_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_other_ctrl_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('1'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('7'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    // ===== Mouse tests =====

    #[test]
    fn test_left_click_position() {
        let handler = InputHandler::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Left), 12, 7);
        assert_eq!(handler.handle_mouse(event), Some((12, 7)));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let handler = InputHandler::new();
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollUp,
        ] {
            assert_eq!(handler.handle_mouse(mouse_event(kind, 1, 1)), None);
        }
    }
}
