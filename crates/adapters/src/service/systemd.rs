// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! systemd service manager adapter

use super::{ServiceError, ServiceManager, ServiceSpec, ServiceStatus, SERVICE_NAME};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Which systemd instance owns the unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemdScope {
    /// Per-user manager (`systemctl --user`)
    User,
    /// System manager; needs root
    System,
}

/// Registers the service as a systemd unit and drives it with `systemctl`
#[derive(Debug, Clone)]
pub struct SystemdServiceManager {
    scope: SystemdScope,
    unit_dir: PathBuf,
}

impl SystemdServiceManager {
    /// Manager for the default unit directory of the given scope
    pub fn for_scope(scope: SystemdScope) -> Result<Self, ServiceError> {
        let unit_dir = match scope {
            SystemdScope::System => PathBuf::from("/etc/systemd/system"),
            SystemdScope::User => user_unit_dir().ok_or(ServiceError::NoUnitDir)?,
        };
        Ok(Self::with_unit_dir(scope, unit_dir))
    }

    pub fn with_unit_dir(scope: SystemdScope, unit_dir: impl Into<PathBuf>) -> Self {
        Self {
            scope,
            unit_dir: unit_dir.into(),
        }
    }

    pub fn unit_path(&self) -> PathBuf {
        self.unit_dir.join(unit_name())
    }

    async fn systemctl(&self, args: &[&str]) -> Result<String, ServiceError> {
        let mut cmd = Command::new("systemctl");
        if self.scope == SystemdScope::User {
            cmd.arg("--user");
        }
        cmd.args(args);

        let output = cmd.output().await?;
        if !output.status.success() {
            return Err(ServiceError::CommandFailed {
                command: format!("systemctl {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn unit_name() -> String {
    format!("{}.service", SERVICE_NAME)
}

fn user_unit_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("systemd/user"));
    }
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".config/systemd/user"))
}

/// Render the unit file for a service spec.
///
/// No `Restart=` directive: a service that refuses to start on a bad
/// configuration must stay failed so the operator sees it.
pub fn render_unit(spec: &ServiceSpec, scope: SystemdScope) -> String {
    let wanted_by = match scope {
        SystemdScope::User => "default.target",
        SystemdScope::System => "multi-user.target",
    };

    format!(
        "[Unit]\n\
         Description=sweep retention cleaner\n\
         After=local-fs.target\n\
         \n\
         [Service]\n\
         Type=simple\n\
         ExecStart={} service\n\
         Environment={}\n\
         KillSignal=SIGTERM\n\
         \n\
         [Install]\n\
         WantedBy={}\n",
        quote(&spec.executable.display().to_string()),
        quote(&format!(
            "{}={}",
            sweep_core::config::STATE_DIR_ENV,
            spec.state_dir.display()
        )),
        wanted_by
    )
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn unit_exists(path: &Path) -> bool {
    path.is_file()
}

#[async_trait]
impl ServiceManager for SystemdServiceManager {
    async fn install(&self, spec: &ServiceSpec) -> Result<(), ServiceError> {
        tokio::fs::create_dir_all(&self.unit_dir).await?;
        tokio::fs::write(self.unit_path(), render_unit(spec, self.scope)).await?;

        self.systemctl(&["daemon-reload"]).await?;
        if spec.start_now {
            self.systemctl(&["enable", "--now", &unit_name()]).await?;
        } else {
            self.systemctl(&["enable", &unit_name()]).await?;
        }
        Ok(())
    }

    async fn uninstall(&self) -> Result<(), ServiceError> {
        let path = self.unit_path();
        if !unit_exists(&path) {
            return Err(ServiceError::NotInstalled);
        }

        // Stopping an already stopped unit is fine; keep going to remove it
        if let Err(e) = self.systemctl(&["disable", "--now", &unit_name()]).await {
            tracing::warn!(error = %e, "failed to disable service");
        }
        tokio::fs::remove_file(&path).await?;
        self.systemctl(&["daemon-reload"]).await?;
        Ok(())
    }

    async fn status(&self) -> Result<ServiceStatus, ServiceError> {
        if !unit_exists(&self.unit_path()) {
            return Ok(ServiceStatus::NotInstalled);
        }

        // is-active exits non-zero for anything but "active", so read stdout directly
        let mut cmd = Command::new("systemctl");
        if self.scope == SystemdScope::User {
            cmd.arg("--user");
        }
        let output = cmd.args(["is-active", &unit_name()]).output().await?;
        let state = String::from_utf8_lossy(&output.stdout).trim().to_string();

        Ok(parse_active_state(&state))
    }
}

fn parse_active_state(state: &str) -> ServiceStatus {
    match state {
        "active" | "reloading" => ServiceStatus::Running,
        "inactive" | "failed" | "deactivating" => ServiceStatus::Stopped,
        other => ServiceStatus::Unknown(other.to_string()),
    }
}

#[cfg(test)]
#[path = "systemd_tests.rs"]
mod tests;
