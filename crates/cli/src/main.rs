// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! sweep - retention cleaner for a scratch folder

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, extensions, notify, run, service};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sweep_core::config::log_path;
use sweep_core::ConfigStore;
use sweep_daemon::{Echo, LogHandle};

use crate::error::SweepError;

#[derive(Parser)]
#[command(
    name = "sweep",
    version,
    about = "sweep - delete files that have outlived their retention period"
)]
struct Cli {
    /// Directory holding config.toml and sweep.log
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the target folder once and print what happened (default)
    Run,
    /// Run as the background service until the host stops it
    Service,
    /// Register the background service with the host service manager
    Install(service::InstallArgs),
    /// Stop and unregister the background service
    Uninstall(service::ScopeArgs),
    /// Show whether the background service is installed and running
    Status(service::ScopeArgs),
    /// Count files in the target folder by extension
    Extensions,
    /// Send a test notification
    NotifyTest,
    /// Show or edit settings
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    match dispatch(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SweepError>() {
                Some(friendly) => eprint!("{}", friendly),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let state_dir = resolve_state_dir(cli.state_dir)?;
    let command = cli.command.unwrap_or(Commands::Run);

    let store = ConfigStore::in_dir(&state_dir);

    // Service mode owns its own log setup
    let _logs = match command {
        Commands::Service => None,
        _ => init_logging(&state_dir, &store),
    };

    match command {
        Commands::Run => run::handle(&store).await,
        Commands::Service => Ok(sweep_daemon::run(&state_dir).await?),
        Commands::Install(args) => service::handle_install(args, &store, &state_dir).await,
        Commands::Uninstall(args) => service::handle_uninstall(args).await,
        Commands::Status(args) => service::handle_status(args).await,
        Commands::Extensions => extensions::handle(&store).await,
        Commands::NotifyTest => notify::handle(&store).await,
        Commands::Config(args) => config::handle(args, &store),
    }
}

/// `--state-dir`, else the environment; always absolute so the service
/// unit and interactive runs agree on it
fn resolve_state_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match flag {
        Some(dir) => dir,
        None => sweep_core::config::state_dir()?,
    };
    Ok(std::path::absolute(dir)?)
}

/// File logging plus a stderr echo; a log that cannot be opened is not fatal
fn init_logging(state_dir: &Path, store: &ConfigStore) -> Option<LogHandle> {
    let verbose = store.load().map(|s| s.verbose_logging).unwrap_or(false);
    match sweep_daemon::logging::init(&log_path(state_dir), verbose, Echo::Stderr) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging to file disabled: {}", e);
            None
        }
    }
}
