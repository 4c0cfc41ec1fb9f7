// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings surface: show, locate and edit `config.toml`

use crate::error::SweepError;
use crate::output;
use anyhow::Result;
use clap::{Args, Subcommand};
use sweep_core::{ConfigStore, Settings, SettingsField};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective settings
    Show,
    /// Print the path of the settings file
    Path,
    /// Set one field, e.g. `sweep config set max_age_days 14`
    Set {
        /// Field name (target_path, max_age_days, recursive, delete_to_trash,
        /// verbose_logging, poll_interval_minutes, extensions,
        /// telegram_bot_token, telegram_chat_id)
        field: SettingsField,
        /// New value; extensions take a comma-separated list
        value: String,
    },
}

pub fn handle(args: ConfigArgs, store: &ConfigStore) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let settings = store.load()?;
            print!("{}", output::settings(&settings)?);
        }
        ConfigCommand::Path => println!("{}", store.path().display()),
        ConfigCommand::Set { field, value } => {
            let settings = set(store, field, &value)?;
            println!("{} = {}", field, shown_value(&settings, field));
        }
    }
    Ok(())
}

/// Update one field and save, returning the saved settings
pub fn set(store: &ConfigStore, field: SettingsField, value: &str) -> Result<Settings> {
    let mut settings = store.load()?;

    let value = match field {
        SettingsField::TargetPath => canonical_target(value)?,
        _ => value.to_string(),
    };
    settings.set(field, &value)?;
    store.save(&settings)?;

    tracing::info!(%field, "setting updated");
    Ok(settings)
}

/// The target must exist when it is chosen; store it absolute
fn canonical_target(value: &str) -> Result<String> {
    let path = std::path::Path::new(value.trim());
    if !path.is_dir() {
        return Err(SweepError::target_missing(path).into());
    }
    Ok(std::fs::canonicalize(path)?.display().to_string())
}

fn shown_value(settings: &Settings, field: SettingsField) -> String {
    match field {
        SettingsField::TargetPath => settings.target_path.clone(),
        SettingsField::MaxAgeDays => settings.max_age_days.to_string(),
        SettingsField::Recursive => settings.recursive.to_string(),
        SettingsField::DeleteToTrash => settings.delete_to_trash.to_string(),
        SettingsField::VerboseLogging => settings.verbose_logging.to_string(),
        SettingsField::PollIntervalMinutes => settings.poll_interval_minutes.to_string(),
        SettingsField::Extensions => settings.extensions.join(", "),
        SettingsField::TelegramBotToken if !settings.telegram_bot_token.is_empty() => {
            "***".to_string()
        }
        SettingsField::TelegramBotToken => String::new(),
        SettingsField::TelegramChatId => settings.telegram_chat_id.clone(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
