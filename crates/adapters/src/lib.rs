// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O

pub mod notify;
pub mod remove;
pub mod service;
pub mod traced;

pub use notify::{
    notify_best_effort, NoOpNotifyAdapter, NotifyAdapter, NotifyError, TelegramNotifier,
};
pub use remove::{FileRemover, RemoveError, SystemRemover};
pub use service::{
    ServiceError, ServiceManager, ServiceSpec, ServiceStatus, SystemdScope,
    SystemdServiceManager, SERVICE_NAME,
};
pub use traced::{TracedNotifyAdapter, TracedRemover};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::FakeNotifyAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use remove::{FakeRemover, RemoveCall};
#[cfg(any(test, feature = "test-support"))]
pub use service::{FakeServiceManager, ServiceCall};
