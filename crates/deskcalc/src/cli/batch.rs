//! Headless batch mode
//!
//! Feeds a key sequence through the engine and prints the two display lines,
//! or the snapshot as JSON.

use std::io::Write;

use tracing::info;

use super::error::CliResult;
use crate::config::CalcConfig;
use crate::display::DisplaySnapshot;
use crate::driver::{CalculatorDriver, HeadlessDriver};

/// Output format for batch results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Total on the first line, current on the second
    #[default]
    Text,
    /// One JSON object
    Json,
}

impl OutputFormat {
    /// Picks the format from the `--json` flag
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Runs `keys` through a fresh engine and writes the final displays to `out`
pub fn run_batch<W: Write>(
    keys: &str,
    config: &CalcConfig,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<DisplaySnapshot> {
    let mut driver = HeadlessDriver::with_config(config.clone());
    driver.press_keys(keys)?;
    let snapshot = driver.snapshot();
    info!(keys, current = %snapshot.current, "batch finished");

    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", snapshot.total)?;
            writeln!(out, "{}", snapshot.current)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &snapshot)?;
            writeln!(out)?;
        }
    }
    Ok(snapshot)
}
