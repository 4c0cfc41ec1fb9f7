// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::notify::{NotifyAdapter, NotifyError};
use crate::remove::{FileRemover, RemoveError};
use async_trait::async_trait;
use std::path::Path;
use sweep_core::DeleteMode;

/// Wrapper that logs every removal the inner remover performs
#[derive(Clone)]
pub struct TracedRemover<R> {
    inner: R,
}

impl<R> TracedRemover<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: FileRemover> FileRemover for TracedRemover<R> {
    fn remove(&self, path: &Path, mode: DeleteMode) -> Result<(), RemoveError> {
        let span = tracing::info_span!("file.remove", path = %path.display(), %mode);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.remove(path, mode);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "deleted"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "delete failed"
            ),
        }

        result
    }
}

/// Wrapper that adds tracing to any NotifyAdapter
#[derive(Clone)]
pub struct TracedNotifyAdapter<N> {
    inner: N,
}

impl<N> TracedNotifyAdapter<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<N: NotifyAdapter> NotifyAdapter for TracedNotifyAdapter<N> {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let span = tracing::info_span!("notify.send", message_len = message.len());
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.send(message).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "sent"),
            Err(e) if e.is_not_configured() => tracing::trace!("no channel configured"),
            Err(e) => tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "send failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
