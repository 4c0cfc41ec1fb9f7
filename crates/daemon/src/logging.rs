// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only log sink
//!
//! The service and interactive invocations may write to the same file at
//! the same time, so nothing here keeps the file open between lines.

use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Startup marker prefix written to the log before anything else.
/// Full format: "--- sweep: starting (pid: 12345) ---"
pub const STARTUP_MARKER_PREFIX: &str = "--- sweep: starting (pid: ";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to prepare log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// Writer that opens the log in append mode for every write.
///
/// Write failures are swallowed so logging can never take the process down.
#[derive(Debug, Clone)]
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Write for AppendFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            let _ = file.write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Where log lines go besides the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    /// File only (service mode)
    None,
    /// Also print to stderr (interactive commands)
    Stderr,
}

/// Keeps the background writer alive and allows changing verbosity
pub struct LogHandle {
    _guard: WorkerGuard,
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Switch between `info` and `debug` unless `RUST_LOG` overrides both
    pub fn set_verbose(&self, verbose: bool) {
        if let Err(e) = self.filter.reload(filter(verbose)) {
            tracing::warn!(error = %e, "failed to change log level");
        }
    }

    /// Cloneable hook for components that re-read the verbose flag
    pub fn verbosity_hook(&self) -> impl Fn(bool) + Send + Sync + 'static {
        let handle = self.filter.clone();
        move |verbose| {
            let _ = handle.reload(filter(verbose));
        }
    }
}

/// Default directive for the verbose flag
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber writing to `log_path`
pub fn init(log_path: &Path, verbose: bool, echo: Echo) -> Result<LogHandle, LoggingError> {
    ensure_parent(log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(AppendFile::new(log_path));
    let (filter_layer, filter_handle) = reload::Layer::new(filter(verbose));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_timer(fmt::time::ChronoLocal::new(TIME_FORMAT.to_string()));

    let stderr_layer = (echo == Echo::Stderr).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(LogHandle {
        _guard: guard,
        filter: filter_handle,
    })
}

/// Append the startup marker synchronously, before the subscriber exists
pub fn write_startup_marker(log_path: &Path) -> Result<(), LoggingError> {
    ensure_parent(log_path)?;
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|source| io_error(log_path, source))?;
    writeln!(file, "{}{}) ---", STARTUP_MARKER_PREFIX, std::process::id())
        .map_err(|source| io_error(log_path, source))
}

/// Write a startup failure synchronously.
/// The non-blocking writer may not flush before the process exits.
pub fn write_startup_error(log_path: &Path, error: &dyn Display) {
    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    else {
        return;
    };
    let _ = writeln!(
        file,
        "{} ERROR service: failed to start: {}",
        chrono::Local::now().format(TIME_FORMAT),
        error
    );
}

fn ensure_parent(log_path: &Path) -> Result<(), LoggingError> {
    match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| io_error(parent, source))
        }
        _ => Ok(()),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> LoggingError {
    LoggingError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
