//! Diagnostic logging setup.
//!
//! The TUI owns the terminal, so diagnostics cannot go to stderr without
//! garbling the alternate screen; they go to a file instead, enabled with
//! `--log <file>`. Request-path failures are recorded here in addition to
//! being surfaced in the UI.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, writing to `log_file` when given.
/// With no file, diagnostics are dropped.
pub fn init(log_file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("revlens=debug")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
