//! Command-line front end: argument parsing, logging and the two run modes

mod batch;
mod commands;
mod error;
mod logging;
mod terminal;

use std::io;

use tracing::debug;

pub use batch::{run_batch, OutputFormat};
pub use commands::Cli;
pub use error::{CliError, CliResult};
pub use logging::{build_subscriber, env_filter, init_tracing};
pub use terminal::{handle_event, run_tui};

/// Runs batch mode when `--keys` is given, the TUI otherwise
pub fn run(cli: &Cli) -> CliResult<()> {
    let config = cli.config()?;

    match &cli.keys {
        Some(keys) => {
            init_tracing(&config, false)?;
            debug!(?config, "batch mode");
            let mut stdout = io::stdout().lock();
            run_batch(
                keys,
                &config,
                OutputFormat::from_json_flag(cli.json),
                &mut stdout,
            )?;
            Ok(())
        }
        None => {
            init_tracing(&config, true)?;
            run_tui(config)
        }
    }
}
