// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct SweepError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl SweepError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for SweepError {}

/// Common error builders for typical failure scenarios.
impl SweepError {
    pub fn no_target() -> Self {
        SweepError::new("No target folder configured")
            .with_context("sweep only ever deletes inside the folder you choose")
            .with_suggestion("Choose one with: sweep config set target_path <DIR>")
    }

    pub fn target_missing(path: &Path) -> Self {
        SweepError::new(format!("Target folder does not exist: {}", path.display()))
            .with_context("The folder may have been moved or deleted")
            .with_suggestion("Point sweep at an existing folder: sweep config set target_path <DIR>")
    }

    pub fn relative_target(path: &Path) -> Self {
        SweepError::new(format!("Target folder is not absolute: {}", path.display()))
            .with_context("The service does not run from your current directory")
            .with_suggestion("Set the full path: sweep config set target_path <DIR>")
    }

    pub fn scan_aborted(reason: &str) -> Self {
        SweepError::new("Cleanup aborted before deleting anything")
            .with_context(reason.to_string())
            .with_suggestion("Check that the target folder exists and is readable")
    }

    pub fn not_installed() -> Self {
        SweepError::new("The sweep service is not installed")
            .with_suggestion("Install it with: sweep install")
    }

    pub fn notify_not_configured() -> Self {
        SweepError::new("Notifications are not configured")
            .with_context("Both a bot token and a chat id are required")
            .with_suggestion("sweep config set telegram_bot_token <TOKEN>")
            .with_suggestion("sweep config set telegram_chat_id <CHAT_ID>")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
