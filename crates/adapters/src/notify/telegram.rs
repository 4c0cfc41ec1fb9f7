// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Telegram Bot API notifier

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use std::time::Duration;
use sweep_core::Settings;
use ureq::Agent;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Posts messages to a chat through a bot's `sendMessage` endpoint
#[derive(Clone)]
pub struct TelegramNotifier {
    agent: Agent,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("api_base", &self.api_base)
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl TelegramNotifier {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();

        Self {
            agent,
            api_base: DEFAULT_API_BASE.to_string(),
            bot_token: bot_token.into().trim().to_string(),
            chat_id: chat_id.into().trim().to_string(),
        }
    }

    /// Build from the credentials stored in settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.telegram_bot_token, &settings.telegram_chat_id)
    }

    /// Point at a different API host (used by tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.bot_token.is_empty() && !self.chat_id.is_empty()
    }

    fn endpoint(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }

    fn post(&self, message: &str) -> Result<(), NotifyError> {
        let form = [
            ("chat_id", self.chat_id.as_str()),
            ("text", message),
            ("parse_mode", "Markdown"),
        ];

        match self.agent.post(self.endpoint()).send_form(form) {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(status)) => Err(NotifyError::Rejected(status)),
            // The error text can embed the URL, which carries the bot token
            Err(e) => Err(NotifyError::Transport(e.to_string().replace(&self.bot_token, "***"))),
        }
    }
}

#[async_trait]
impl NotifyAdapter for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        if !self.is_configured() {
            return Err(NotifyError::NotConfigured);
        }

        let this = self.clone();
        let message = message.to_string();
        tokio::task::spawn_blocking(move || this.post(&message))
            .await
            .map_err(|e| NotifyError::Transport(format!("notifier task failed: {}", e)))?
    }
}

#[cfg(test)]
#[path = "telegram_tests.rs"]
mod tests;
