// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Service lifecycle state machine
//!
//! Transitions are driven only by the host's start/stop signals:
//!
//! ```text
//! Stopped --Start--> Starting --Validated--> Running --Stop--> Stopping --Halted--> Stopped
//!                    Starting --Rejected---> Stopped
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally visible state of the scheduled service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceState {
    #[default]
    Stopped,
    Starting,
    Running,
    Stopping,
}

/// Inputs to the lifecycle state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Host asked the service to start
    Start,
    /// Startup validation passed and the timer is armed
    Validated,
    /// Startup validation failed
    Rejected,
    /// Host asked the service to stop
    Stop,
    /// Timer disarmed and resources released
    Halted,
}

impl ServiceState {
    /// Next state, or `None` if the event is not valid in this state
    pub fn transition(self, event: LifecycleEvent) -> Option<ServiceState> {
        use LifecycleEvent as E;
        use ServiceState as S;

        match (self, event) {
            (S::Stopped, E::Start) => Some(S::Starting),
            (S::Starting, E::Validated) => Some(S::Running),
            (S::Starting, E::Rejected) => Some(S::Stopped),
            (S::Running, E::Stop) => Some(S::Stopping),
            (S::Stopping, E::Halted) => Some(S::Stopped),
            _ => None,
        }
    }

    pub fn is_running(self) -> bool {
        self == ServiceState::Running
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceState::Stopped => "stopped",
            ServiceState::Starting => "starting",
            ServiceState::Running => "running",
            ServiceState::Stopping => "stopping",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
