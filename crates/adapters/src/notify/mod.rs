// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification adapters

mod noop;
mod telegram;

pub use noop::NoOpNotifyAdapter;
pub use telegram::TelegramNotifier;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifyAdapter;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from notification delivery
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification channel is not configured")]
    NotConfigured,
    #[error("notification endpoint rejected the message with status {0}")]
    Rejected(u16),
    #[error("notification transport failed: {0}")]
    Transport(String),
}

impl NotifyError {
    /// True when there was simply nowhere to send the message
    pub fn is_not_configured(&self) -> bool {
        matches!(self, NotifyError::NotConfigured)
    }
}

/// Adapter for delivering short status messages to an external channel
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Send a message
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// Send a message, logging instead of propagating any failure.
///
/// Returns whether the message was delivered.
pub async fn notify_best_effort<N: NotifyAdapter>(notifier: &N, message: &str) -> bool {
    match notifier.send(message).await {
        Ok(()) => true,
        Err(e) if e.is_not_configured() => {
            tracing::debug!("notifications not configured, skipping");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to send notification");
            false
        }
    }
}
