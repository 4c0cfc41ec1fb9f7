// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flat settings record as stored on disk

use super::ConfigError;
use crate::policy::{poll_interval, DeleteMode, ExtensionFilter, RetentionPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Persisted settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory to clean; empty means "not configured"
    pub target_path: String,
    pub max_age_days: u32,
    pub recursive: bool,
    pub delete_to_trash: bool,
    pub verbose_logging: bool,
    /// Minutes between scheduled runs; non-positive falls back to the default
    pub poll_interval_minutes: i64,
    /// Extension allow-list as entered by the user
    pub extensions: Vec<String>,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_path: String::new(),
            max_age_days: 7,
            recursive: true,
            delete_to_trash: true,
            verbose_logging: false,
            poll_interval_minutes: 60,
            extensions: Vec::new(),
            telegram_bot_token: String::new(),
            telegram_chat_id: String::new(),
        }
    }
}

impl Settings {
    pub fn has_target(&self) -> bool {
        !self.target_path.trim().is_empty()
    }

    pub fn target_path(&self) -> PathBuf {
        PathBuf::from(self.target_path.trim())
    }

    /// Snapshot the retention rules for one run
    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy {
            target_path: self.target_path(),
            max_age_days: self.max_age_days,
            recursive: self.recursive,
            extensions: ExtensionFilter::new(&self.extensions),
            delete_mode: DeleteMode::from_trash_flag(self.delete_to_trash),
            verbose_logging: self.verbose_logging,
            poll_interval: poll_interval(self.poll_interval_minutes),
        }
    }

    /// Set one field from its textual form
    pub fn set(&mut self, field: SettingsField, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        };
        match field {
            SettingsField::TargetPath => self.target_path = value.trim().to_string(),
            SettingsField::MaxAgeDays => {
                self.max_age_days = value.trim().parse().map_err(|_| invalid())?
            }
            SettingsField::Recursive => self.recursive = parse_bool(value).ok_or_else(invalid)?,
            SettingsField::DeleteToTrash => {
                self.delete_to_trash = parse_bool(value).ok_or_else(invalid)?
            }
            SettingsField::VerboseLogging => {
                self.verbose_logging = parse_bool(value).ok_or_else(invalid)?
            }
            SettingsField::PollIntervalMinutes => {
                self.poll_interval_minutes = value.trim().parse().map_err(|_| invalid())?
            }
            SettingsField::Extensions => {
                self.extensions = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            }
            SettingsField::TelegramBotToken => self.telegram_bot_token = value.trim().to_string(),
            SettingsField::TelegramChatId => self.telegram_chat_id = value.trim().to_string(),
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Names of the settings fields, as used on the command line and on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    TargetPath,
    MaxAgeDays,
    Recursive,
    DeleteToTrash,
    VerboseLogging,
    PollIntervalMinutes,
    Extensions,
    TelegramBotToken,
    TelegramChatId,
}

impl SettingsField {
    pub const ALL: [SettingsField; 9] = [
        SettingsField::TargetPath,
        SettingsField::MaxAgeDays,
        SettingsField::Recursive,
        SettingsField::DeleteToTrash,
        SettingsField::VerboseLogging,
        SettingsField::PollIntervalMinutes,
        SettingsField::Extensions,
        SettingsField::TelegramBotToken,
        SettingsField::TelegramChatId,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SettingsField::TargetPath => "target_path",
            SettingsField::MaxAgeDays => "max_age_days",
            SettingsField::Recursive => "recursive",
            SettingsField::DeleteToTrash => "delete_to_trash",
            SettingsField::VerboseLogging => "verbose_logging",
            SettingsField::PollIntervalMinutes => "poll_interval_minutes",
            SettingsField::Extensions => "extensions",
            SettingsField::TelegramBotToken => "telegram_bot_token",
            SettingsField::TelegramChatId => "telegram_chat_id",
        }
    }
}

impl fmt::Display for SettingsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettingsField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownField(s.to_string()))
    }
}
