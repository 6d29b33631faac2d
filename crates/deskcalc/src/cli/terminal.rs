//! Interactive terminal session

use std::io::{self, IsTerminal, Write};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use super::error::{CliError, CliResult};
use crate::config::CalcConfig;
use crate::tui::{render, CalculatorApp, InputHandler};

/// Runs the TUI until the user quits, restoring the terminal afterwards
pub fn run_tui(config: CalcConfig) -> CliResult<()> {
    if !io::stdout().is_terminal() {
        return Err(CliError::terminal(
            "stdout is not a terminal; use --keys for batch mode",
        ));
    }

    let session = TerminalSession::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!(width = config.display_width, "starting interactive session");
    let result = run_app(&mut terminal, CalculatorApp::with_config(config));

    terminal.show_cursor()?;
    drop(session);

    result
}

/// Raw mode plus alternate screen, undone on drop.
///
/// Restoring in `Drop` covers every early return between entering and
/// leaving, including a failed `Terminal::new`.
struct TerminalSession<W: Write> {
    writer: W,
}

impl<W: Write> TerminalSession<W> {
    fn enter(writer: W) -> CliResult<Self> {
        enable_raw_mode()
            .map_err(|e| CliError::terminal(format!("cannot enable raw mode: {e}")))?;
        let mut session = Self { writer };
        execute!(session.writer, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(session)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            debug!(%e, "disable raw mode failed");
        }
        if let Err(e) = execute!(self.writer, LeaveAlternateScreen, DisableMouseCapture) {
            debug!(%e, "leave alternate screen failed");
        }
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> CliResult<()> {
    let handler = InputHandler::new();

    loop {
        let area = terminal.draw(|frame| render(&app, frame))?.area;
        if handle_event(&mut app, &handler, area, event::read()?) {
            break;
        }
    }

    info!("session ended");
    Ok(())
}

/// Applies one terminal event, returning true when the app should quit.
///
/// `area` is the size of the frame last drawn, which mouse clicks are
/// resolved against.
pub fn handle_event(
    app: &mut CalculatorApp,
    handler: &InputHandler,
    area: Rect,
    event: Event,
) -> bool {
    match event {
        Event::Key(key) => app.handle_action(handler.handle_key(key)),
        Event::Mouse(mouse) => {
            if let Some((x, y)) = handler.handle_mouse(mouse) {
                app.click(area, x, y);
            }
            app.should_quit()
        }
        _ => app.should_quit(),
    }
}
