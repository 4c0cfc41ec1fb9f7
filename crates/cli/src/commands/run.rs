// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot interactive cleanup

use crate::error::SweepError;
use crate::output;
use anyhow::Result;
use sweep_adapters::{
    FileRemover, NotifyAdapter, SystemRemover, TelegramNotifier, TracedNotifyAdapter,
    TracedRemover,
};
use sweep_core::{Clock, ConfigStore, RunSummary, Settings, SystemClock};
use sweep_engine::CleanupEngine;

pub async fn handle(store: &ConfigStore) -> Result<()> {
    let settings = store.load()?;
    let notifier = TracedNotifyAdapter::new(TelegramNotifier::from_settings(&settings));
    let summary = run_once(
        &settings,
        TracedRemover::new(SystemRemover::new()),
        SystemClock,
        &notifier,
    )
    .await?;

    print!("{}", output::summary(&summary, &settings.target_path()));
    match &summary.abort_reason {
        Some(reason) => Err(SweepError::scan_aborted(reason).into()),
        None => Ok(()),
    }
}

/// Run the engine once against a settings snapshot.
///
/// Failed files do not make this an error; only a missing target does.
/// The notifier hears about runs that deleted something.
pub async fn run_once<R, C, N>(
    settings: &Settings,
    remover: R,
    clock: C,
    notifier: &N,
) -> Result<RunSummary>
where
    R: FileRemover + 'static,
    C: Clock + 'static,
    N: NotifyAdapter,
{
    if !settings.has_target() {
        return Err(SweepError::no_target().into());
    }

    let policy = settings.policy();
    let snapshot = policy.clone();
    let engine = CleanupEngine::new(remover, clock);
    let summary = tokio::task::spawn_blocking(move || engine.run(&snapshot)).await?;

    if summary.files_deleted > 0 {
        sweep_engine::report(notifier, &summary, &policy.target_path).await;
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
