// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sweep service
//!
//! Owns the cleanup timer for service mode and the append-only log sink
//! shared with interactive invocations.

pub mod lifecycle;
pub mod logging;
mod run;

pub use lifecycle::{
    NotifierFactory, Service, ServiceDeps, StartupError, STARTED_MESSAGE, STOPPED_MESSAGE,
};
pub use logging::{Echo, LogHandle, LoggingError};
pub use run::{run, system_service, DaemonError, SystemService};
