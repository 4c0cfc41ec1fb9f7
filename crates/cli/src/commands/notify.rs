// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification channel test

use crate::error::SweepError;
use anyhow::Result;
use sweep_adapters::{NotifyAdapter, NotifyError, TelegramNotifier, TracedNotifyAdapter};
use sweep_core::ConfigStore;

pub const TEST_MESSAGE: &str = "✅ Test message from sweep";

pub async fn handle(store: &ConfigStore) -> Result<()> {
    let settings = store.load()?;
    let notifier = TracedNotifyAdapter::new(TelegramNotifier::from_settings(&settings));
    send_test(&notifier).await?;
    println!("Test message sent");
    Ok(())
}

/// Send the test message, surfacing delivery errors to the caller
pub async fn send_test<N: NotifyAdapter>(notifier: &N) -> Result<()> {
    match notifier.send(TEST_MESSAGE).await {
        Ok(()) => Ok(()),
        Err(NotifyError::NotConfigured) => Err(SweepError::notify_not_configured().into()),
        Err(e) => Err(SweepError::new("Test message was not delivered")
            .with_context(e.to_string())
            .with_suggestion("Check the bot token and chat id: sweep config show")
            .into()),
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
