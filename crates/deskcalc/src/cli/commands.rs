//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::Parser;

use super::error::{CliError, CliResult};
use crate::config::{CalcConfig, Verbosity};
use crate::display::DEFAULT_DISPLAY_WIDTH;

/// deskcalc: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Feed a key sequence headlessly and print the displays
    ///
    /// Uses the same bindings as the TUI, e.g. "7+3=" or "9nr".
    #[arg(short, long, value_name = "SEQ")]
    pub keys: Option<String>,

    /// Print the batch result as JSON
    #[arg(long, requires = "keys")]
    pub json: bool,

    /// Characters of the current entry shown on the display
    #[arg(short, long, default_value_t = DEFAULT_DISPLAY_WIDTH)]
    pub width: usize,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the runtime configuration from the parsed arguments
    pub fn config(&self) -> CliResult<CalcConfig> {
        if self.width == 0 {
            return Err(CliError::invalid_argument("--width must be at least 1"));
        }
        let config = CalcConfig::new()
            .with_display_width(self.width)
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose));
        Ok(match &self.log_file {
            Some(path) => config.with_log_file(path),
            None => config,
        })
    }
}
