//! JSON trace output for diagnostic runs.
//!
//! Events are written synchronously: `romantool` is short-lived and often
//! leaves through `process::exit`, which would discard anything still queued
//! in a background writer.

use std::path::Path;

/// File created under the log directory.
pub const TRACE_FILE_NAME: &str = "roman-trace.jsonl";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "roman_core=debug,roman_engine=debug";

#[derive(Debug, thiserror::Error)]
pub enum TraceInitError {
    #[error("cannot open trace file in {dir}: {reason}")]
    Appender { dir: String, reason: String },
    #[error("a global trace subscriber is already installed")]
    AlreadyInstalled,
}

/// Install a JSON subscriber appending to [`TRACE_FILE_NAME`] in `log_dir`.
///
/// The directory is created if missing. `RUST_LOG` overrides the default
/// filter. Without the `trace` feature this does nothing.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Result<(), TraceInitError> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(TRACE_FILE_NAME)
        .build(log_dir)
        .map_err(|e| TraceInitError::Appender {
            dir: log_dir.display().to_string(),
            reason: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .json()
        .with_writer(appender)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .try_init()
        .map_err(|_| TraceInitError::AlreadyInstalled)
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Result<(), TraceInitError> {
    Ok(())
}
