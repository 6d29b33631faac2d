//! deskcalc: keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! deskcalc                       # Interactive TUI
//! deskcalc --keys "7+3="         # Batch: print total and current
//! deskcalc --keys "8/0=" --json  # Batch: JSON snapshot
//! deskcalc --log-file calc.log   # TUI with logging
//! ```

use std::process::ExitCode;

use clap::Parser;
use deskcalc::cli::{self, Cli};

fn main() -> ExitCode {
    match cli::run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
