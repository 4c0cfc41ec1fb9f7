// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake service manager for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ServiceError, ServiceManager, ServiceSpec, ServiceStatus};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Recorded service manager call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    Install(ServiceSpec),
    Uninstall,
    Status,
}

#[derive(Default)]
struct FakeServiceState {
    calls: Vec<ServiceCall>,
    installed: Option<ServiceSpec>,
}

/// In-memory service manager
#[derive(Clone, Default)]
pub struct FakeServiceManager {
    inner: Arc<Mutex<FakeServiceState>>,
}

impl FakeServiceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    pub fn installed(&self) -> Option<ServiceSpec> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .installed
            .clone()
    }
}

#[async_trait]
impl ServiceManager for FakeServiceManager {
    async fn install(&self, spec: &ServiceSpec) -> Result<(), ServiceError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(ServiceCall::Install(spec.clone()));
        inner.installed = Some(spec.clone());
        Ok(())
    }

    async fn uninstall(&self) -> Result<(), ServiceError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(ServiceCall::Uninstall);
        inner
            .installed
            .take()
            .map(|_| ())
            .ok_or(ServiceError::NotInstalled)
    }

    async fn status(&self) -> Result<ServiceStatus, ServiceError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(ServiceCall::Status);
        Ok(match &inner.installed {
            Some(spec) if spec.start_now => ServiceStatus::Running,
            Some(_) => ServiceStatus::Stopped,
            None => ServiceStatus::NotInstalled,
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
