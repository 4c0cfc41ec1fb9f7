// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host service manager adapters
//!
//! Registration, removal and status of the background service are delegated
//! to the platform's service manager; nothing here supervises the process.

mod systemd;

pub use systemd::{SystemdScope, SystemdServiceManager};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeServiceManager, ServiceCall};

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Service name registered with the host
pub const SERVICE_NAME: &str = "sweep";

/// Errors from service registration
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service is not installed")]
    NotInstalled,
    #[error("could not determine service unit directory")]
    NoUnitDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// What the host needs to know to run the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Executable to launch in service mode
    pub executable: PathBuf,
    /// State directory the service must share with interactive runs
    pub state_dir: PathBuf,
    /// Start right after registering
    pub start_now: bool,
}

/// Service status as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    NotInstalled,
    Stopped,
    Running,
    Unknown(String),
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::NotInstalled => write!(f, "not installed"),
            ServiceStatus::Stopped => write!(f, "stopped"),
            ServiceStatus::Running => write!(f, "running"),
            ServiceStatus::Unknown(state) => write!(f, "unknown ({})", state),
        }
    }
}

/// Adapter for the host's service manager
#[async_trait]
pub trait ServiceManager: Clone + Send + Sync + 'static {
    /// Register the service with the host
    async fn install(&self, spec: &ServiceSpec) -> Result<(), ServiceError>;

    /// Stop and unregister the service
    async fn uninstall(&self) -> Result<(), ServiceError>;

    /// Query the host for the service's state
    async fn status(&self) -> Result<ServiceStatus, ServiceError>;
}
