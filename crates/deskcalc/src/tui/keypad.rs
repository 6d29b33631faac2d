//! Clickable keypad for the TUI calculator
//!
//! Buttons sit on a 6x4 grid. A button may span several columns; the `0`
//! button spans two. Each button carries the [`InputEvent`] it fires, so a
//! click and the matching key press go through the same dispatch.
//!
//! ```text
//! [ % ] [1/x] [ C ] [ ⌫ ]
//! [x²]  [√x]  [ ± ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Operation, UnaryOp};
use crate::input::InputEvent;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Event fired when the button is pressed
    pub event: InputEvent,
    /// Grid row
    pub row: usize,
    /// First grid column
    pub col: usize,
    /// Columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub const fn new(event: InputEvent, row: usize, col: usize) -> Self {
        Self {
            event,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Sets the number of columns the button covers
    #[must_use]
    pub const fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Label drawn on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.event.label()
    }

    /// Returns true if the button covers the grid cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.event {
            InputEvent::Digit(_) | InputEvent::Point => Style::default().fg(Color::White),
            InputEvent::Operator(_) => Style::default().fg(Color::Yellow),
            InputEvent::Evaluate => Style::default().fg(Color::Green),
            InputEvent::Clear | InputEvent::Backspace => Style::default().fg(Color::Red),
            InputEvent::Unary(_) => Style::default().fg(Color::Cyan),
        }
    }
}

/// The keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use InputEvent::{Backspace, Clear, Digit, Evaluate, Operator, Point, Unary};

        let buttons = vec![
            // Row 0: % 1/x C ⌫
            KeypadButton::new(Unary(UnaryOp::Percent), 0, 0),
            KeypadButton::new(Unary(UnaryOp::Reciprocal), 0, 1),
            KeypadButton::new(Clear, 0, 2),
            KeypadButton::new(Backspace, 0, 3),
            // Row 1: x² √x ± ÷
            KeypadButton::new(Unary(UnaryOp::Square), 1, 0),
            KeypadButton::new(Unary(UnaryOp::SquareRoot), 1, 1),
            KeypadButton::new(Unary(UnaryOp::Negate), 1, 2),
            KeypadButton::new(Operator(Operation::Divide), 1, 3),
            // Row 2: 7 8 9 ×
            KeypadButton::new(Digit(7), 2, 0),
            KeypadButton::new(Digit(8), 2, 1),
            KeypadButton::new(Digit(9), 2, 2),
            KeypadButton::new(Operator(Operation::Multiply), 2, 3),
            // Row 3: 4 5 6 −
            KeypadButton::new(Digit(4), 3, 0),
            KeypadButton::new(Digit(5), 3, 1),
            KeypadButton::new(Digit(6), 3, 2),
            KeypadButton::new(Operator(Operation::Subtract), 3, 3),
            // Row 4: 1 2 3 +
            KeypadButton::new(Digit(1), 4, 0),
            KeypadButton::new(Digit(2), 4, 1),
            KeypadButton::new(Digit(3), 4, 2),
            KeypadButton::new(Operator(Operation::Add), 4, 3),
            // Row 5: 0 (wide) . =
            KeypadButton::new(Digit(0), 5, 0).with_span(2),
            KeypadButton::new(Point, 5, 2),
            KeypadButton::new(Evaluate, 5, 3),
        ];

        Self {
            buttons,
            rows: 6,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the index of the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Finds the button that fires `event`
    #[must_use]
    pub fn find_button(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Highlights the button for `event`, releasing every other button.
    ///
    /// Events with no button leave the keypad released.
    pub fn highlight(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(idx) = self.find_button(event) {
            self.buttons[idx].pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Index of the highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(area);
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = usize::from((rel_x - 1) / btn_width);
        let row = usize::from((rel_y - 1) / btn_height);

        if row < self.rows && col < self.cols {
            self.button_at(row, col)
        } else {
            None
        }
    }

    fn cell_size(&self, area: Rect) -> (u16, u16) {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        (
            inner_width / self.cols as u16,
            inner_height / self.rows as u16,
        )
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let (btn_width, btn_height) = self.keypad.cell_size(area);
        if btn_width < 3 || btn_height == 0 {
            return; // Too small to render
        }

        let inner_x = area.x + 1;
        let inner_y = area.y + 1;

        for btn in self.keypad.buttons() {
            let x = inner_x + btn.col as u16 * btn_width;
            let y = inner_y + btn.row as u16 * btn_height + btn_height / 2;
            let width = btn_width * btn.span as u16;

            let label = format!("[{}]", btn.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + width.saturating_sub(label_width) / 2;

            buf.set_span(label_x, y, &Span::styled(label, btn.style()), width);
        }
    }
}
