// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registering the background service with the host

use crate::error::SweepError;
use anyhow::Result;
use std::path::Path;
use sweep_adapters::{
    ServiceError, ServiceManager, ServiceSpec, ServiceStatus, SystemdScope,
    SystemdServiceManager, SERVICE_NAME,
};
use sweep_core::ConfigStore;
use tracing::info;

#[derive(clap::Args)]
pub struct ScopeArgs {
    /// Use the system-wide service manager instead of the per-user one
    #[arg(long)]
    system: bool,
}

impl ScopeArgs {
    fn manager(&self) -> Result<SystemdServiceManager> {
        let scope = if self.system {
            SystemdScope::System
        } else {
            SystemdScope::User
        };
        Ok(SystemdServiceManager::for_scope(scope)?)
    }
}

#[derive(clap::Args)]
pub struct InstallArgs {
    #[command(flatten)]
    scope: ScopeArgs,

    /// Start the service as soon as it is registered
    #[arg(long)]
    start: bool,
}

pub async fn handle_install(args: InstallArgs, store: &ConfigStore, state_dir: &Path) -> Result<()> {
    let spec = ServiceSpec {
        executable: std::env::current_exe()?,
        state_dir: state_dir.to_path_buf(),
        start_now: args.start,
    };
    install(&args.scope.manager()?, store, &spec).await?;

    if spec.start_now {
        println!("Installed and started {} service", SERVICE_NAME);
    } else {
        println!("Installed {} service", SERVICE_NAME);
    }
    Ok(())
}

pub async fn handle_uninstall(args: ScopeArgs) -> Result<()> {
    uninstall(&args.manager()?).await?;
    println!("Uninstalled {} service", SERVICE_NAME);
    Ok(())
}

pub async fn handle_status(args: ScopeArgs) -> Result<()> {
    let current = status(&args.manager()?).await?;
    println!("{}: {}", SERVICE_NAME, current);
    Ok(())
}

/// Register the service, refusing while the settings could not start it
pub async fn install<M: ServiceManager>(
    manager: &M,
    store: &ConfigStore,
    spec: &ServiceSpec,
) -> Result<()> {
    let settings = store.load()?;
    if !settings.has_target() {
        return Err(SweepError::no_target().into());
    }
    let target = settings.target_path();
    if !target.is_absolute() {
        return Err(SweepError::relative_target(&target).into());
    }
    if !target.is_dir() {
        return Err(SweepError::target_missing(&target).into());
    }

    manager.install(spec).await?;
    info!(
        target: "service",
        executable = %spec.executable.display(),
        state_dir = %spec.state_dir.display(),
        "service installed"
    );
    Ok(())
}

pub async fn uninstall<M: ServiceManager>(manager: &M) -> Result<()> {
    match manager.uninstall().await {
        Ok(()) => {
            info!(target: "service", "service uninstalled");
            Ok(())
        }
        Err(ServiceError::NotInstalled) => Err(SweepError::not_installed().into()),
        Err(e) => Err(e.into()),
    }
}

/// Current status; `NotInstalled` is a normal answer, not an error
pub async fn status<M: ServiceManager>(manager: &M) -> Result<ServiceStatus> {
    Ok(manager.status().await?)
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
