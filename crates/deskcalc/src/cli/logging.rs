//! Tracing subscriber setup
//!
//! The TUI owns stdout, so interactive sessions only log when `--log-file`
//! is given. Batch runs fall back to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use super::error::{CliError, CliResult};
use crate::config::CalcConfig;

/// Filter from `RUST_LOG`, or the configured verbosity when unset
#[must_use]
pub fn env_filter(config: &CalcConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Builds a formatting subscriber writing to `writer`
pub fn build_subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

/// Installs the global subscriber.
///
/// `interactive` sessions without a log file install nothing.
pub fn init_tracing(config: &CalcConfig, interactive: bool) -> CliResult<()> {
    let filter = env_filter(config);
    let result = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing::subscriber::set_global_default(build_subscriber(
                filter,
                Mutex::new(file),
                false,
            ))
        }
        None if interactive => return Ok(()),
        None => tracing::subscriber::set_global_default(build_subscriber(
            filter,
            std::io::stderr,
            false,
        )),
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}
