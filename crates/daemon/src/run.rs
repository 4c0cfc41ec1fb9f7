// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service mode: run until the host asks us to stop

use std::path::Path;
use std::sync::Arc;

use sweep_adapters::{SystemRemover, TelegramNotifier, TracedNotifyAdapter, TracedRemover};
use sweep_core::config::log_path;
use sweep_core::{ConfigStore, Settings, SystemClock};
use thiserror::Error;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

use crate::lifecycle::{Service, ServiceDeps, StartupError};
use crate::logging::{self, Echo, LogHandle};

/// Service with the production adapters
pub type SystemService =
    Service<TracedRemover<SystemRemover>, SystemClock, TracedNotifyAdapter<TelegramNotifier>>;

/// Errors that end service mode. Logging problems are never among them.
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error(transparent)]
    Startup(#[from] StartupError),
    #[error("failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),
}

/// Build the service used in production
pub fn system_service(store: ConfigStore, logs: Option<&LogHandle>) -> SystemService {
    let deps = ServiceDeps {
        remover: TracedRemover::new(SystemRemover::new()),
        clock: SystemClock,
        notifier: Arc::new(|settings: &Settings| {
            TracedNotifyAdapter::new(TelegramNotifier::from_settings(settings))
        }),
    };
    match logs {
        Some(logs) => Service::with_verbosity_hook(store, deps, logs.verbosity_hook()),
        None => Service::new(store, deps),
    }
}

/// Run as the long-lived service for `state_dir`.
///
/// Returns once SIGTERM or SIGINT has been handled, or straight away when
/// the settings are unusable.
pub async fn run(state_dir: &Path) -> Result<(), DaemonError> {
    let log_path = log_path(state_dir);
    let store = ConfigStore::in_dir(state_dir);

    // Installed before the first scan can start
    let mut sigterm = signal(SignalKind::terminate()).map_err(DaemonError::Signal)?;
    let mut sigint = signal(SignalKind::interrupt()).map_err(DaemonError::Signal)?;

    let verbose = store.load().map(|s| s.verbose_logging).unwrap_or(false);
    let logs = open_logs(&log_path, verbose);

    info!(target: "service", state_dir = %state_dir.display(), "starting sweep service");

    let mut service = system_service(store, logs.as_ref());
    if let Err(e) = service.start().await {
        logging::write_startup_error(&log_path, &e);
        drop(logs);
        return Err(e.into());
    }

    tokio::select! {
        _ = sigterm.recv() => info!(target: "service", "received SIGTERM, shutting down"),
        _ = sigint.recv() => info!(target: "service", "received SIGINT, shutting down"),
    }

    service.stop().await;
    Ok(())
}

/// Set up the log sink for service mode.
///
/// An unusable log file falls back to stderr, which the service manager
/// captures; if no subscriber can be installed the service runs unlogged.
fn open_logs(log_path: &Path, verbose: bool) -> Option<LogHandle> {
    // Written before tracing is set up so every attempt is delimited
    let echo = match logging::write_startup_marker(log_path) {
        Ok(()) => Echo::None,
        Err(e) => {
            eprintln!("warning: {}; logging to stderr", e);
            Echo::Stderr
        }
    };

    match logging::init(log_path, verbose, echo) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
