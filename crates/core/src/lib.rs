// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sweep-core: value types for the sweep retention cleaner
//!
//! This crate provides:
//! - The per-run retention policy snapshot and its eligibility rules
//! - The run summary produced by every scan
//! - Persisted settings and the TOML store behind them
//! - The service lifecycle state machine
//! - A clock abstraction so age checks are testable

pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod policy;
pub mod summary;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, ConfigStore, Settings, SettingsField};
pub use lifecycle::{LifecycleEvent, ServiceState};
pub use policy::{DeleteMode, ExtensionFilter, RetentionPolicy, DEFAULT_POLL_INTERVAL_MINUTES};
pub use summary::{FileFailure, RunSummary};
