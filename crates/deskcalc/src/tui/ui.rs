//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::input::KEY_BINDINGS;

/// Title drawn on the outer border
pub const TITLE: &str = " deskcalc ";

/// Bindings that exist only in the terminal front end
pub const TUI_BINDINGS: &[(&str, &str)] = &[("Click", "Press button"), ("q ^C", "Quit")];

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Total expression line
    pub total: Rect,
    /// Current entry line
    pub current: Rect,
    /// Status message line
    pub status: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Key binding sidebar
    pub help: Rect,
}

/// Splits the frame area into the calculator regions.
///
/// Rendering and mouse hit-testing both use this, so a click lands on the
/// button drawn under it.
#[must_use]
pub fn layout(area: Rect) -> UiLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),    // Displays and keypad
            Constraint::Length(24), // Help sidebar
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Total
            Constraint::Length(3), // Current
            Constraint::Length(1), // Status
            Constraint::Min(8),    // Keypad
        ])
        .split(columns[0]);

    UiLayout {
        total: rows[0],
        current: rows[1],
        status: rows[2],
        keypad: rows[3],
        help: columns[1],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_total(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.total_display(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Total ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .render(area, buf);
    }

    fn render_current(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.status_message().is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.current_display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Current ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    /// The current display clips, so the full status message goes here
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let line = match self.app.status_message() {
            Some(message) => Span::styled(format!("✗ {message}"), Style::default().fg(Color::Red)),
            None => Span::styled("Ready", Style::default().fg(Color::DarkGray)),
        };
        Paragraph::new(line).render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = KEY_BINDINGS
            .iter()
            .chain(TUI_BINDINGS)
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>8}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area);
        self.render_total(regions.total, buf);
        self.render_current(regions.current, buf);
        self.render_status(regions.status, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        self.render_help(regions.help, buf);
    }
}
