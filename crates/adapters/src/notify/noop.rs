// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op notify adapter for when notifications are disabled.

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;

/// Notify adapter that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifyAdapter;

impl NoOpNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for NoOpNotifyAdapter {
    async fn send(&self, _message: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}
