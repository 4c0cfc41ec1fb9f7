// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Forwarding run summaries to the notification channel

use std::path::Path;
use sweep_adapters::{notify_best_effort, NotifyAdapter};
use sweep_core::RunSummary;

/// Send the summary of a finished run when there is something to say.
///
/// A run is worth reporting when it deleted files or was aborted. Delivery
/// failures are logged, never returned. Returns whether a message was sent.
pub async fn report<N: NotifyAdapter>(notifier: &N, summary: &RunSummary, target: &Path) -> bool {
    if !summary.is_reportable() {
        tracing::debug!("nothing deleted, no report sent");
        return false;
    }
    notify_best_effort(notifier, &summary.notification_text(target)).await
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
