// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted settings and where they live

mod settings;
mod store;

pub use settings::{Settings, SettingsField};
pub use store::ConfigStore;

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable overriding the state directory
pub const STATE_DIR_ENV: &str = "SWEEP_STATE_DIR";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine state directory (set {STATE_DIR_ENV} or HOME)")]
    NoStateDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown setting: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Directory holding `config.toml` and `sweep.log`
///
/// Resolution order: `$SWEEP_STATE_DIR`, `$XDG_STATE_HOME/sweep`,
/// `$HOME/.local/state/sweep`.
pub fn state_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = non_empty_env(STATE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(xdg) = non_empty_env("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("sweep"));
    }
    let home = non_empty_env("HOME").ok_or(ConfigError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/sweep"))
}

/// Path of the append-only log inside a state directory
pub fn log_path(state_dir: &std::path::Path) -> PathBuf {
    state_dir.join("sweep.log")
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
