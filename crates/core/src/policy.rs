// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retention policy: the immutable per-run snapshot the cleanup engine reads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Poll interval used when the configured one is zero or negative
pub const DEFAULT_POLL_INTERVAL_MINUTES: u64 = 60;

const SECS_PER_DAY: u64 = 86_400;

/// How eligible files are removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Unlink the file
    Permanent,
    /// Move the file to the platform's recycle bin
    Trash,
}

impl DeleteMode {
    pub fn from_trash_flag(delete_to_trash: bool) -> Self {
        if delete_to_trash {
            DeleteMode::Trash
        } else {
            DeleteMode::Permanent
        }
    }
}

impl fmt::Display for DeleteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteMode::Permanent => write!(f, "permanent"),
            DeleteMode::Trash => write!(f, "trash"),
        }
    }
}

/// Allow-list of lower-cased extensions, each with its leading dot.
///
/// An empty filter matches every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Build a filter from user-entered extensions.
    ///
    /// Entries are trimmed and lower-cased, a missing leading dot is added,
    /// and blank entries are dropped, so `"LOG"`, `" .log"` and `".Log"`
    /// all mean `.log`.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = entries
            .into_iter()
            .filter_map(|entry| normalize_extension(entry.as_ref()))
            .collect();
        Self { extensions }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Whether a file passes the filter
    pub fn matches(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        extension_of(path).is_some_and(|ext| self.extensions.contains(&ext))
    }
}

fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bare = trimmed.trim_start_matches('.');
    if bare.is_empty() {
        return None;
    }
    Some(format!(".{}", bare.to_lowercase()))
}

/// Lower-cased extension of a path including the leading dot, e.g. `.log`.
///
/// Everything from the last `.` of the file name counts, so a dotfile such
/// as `.bashrc` is its own extension. A trailing `.` means no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let dot = name.rfind('.')?;
    let ext = &name[dot..];
    (ext.len() > 1).then(|| ext.to_lowercase())
}

/// Normalize a configured poll interval, coercing non-positive values to
/// [`DEFAULT_POLL_INTERVAL_MINUTES`].
pub fn poll_interval(minutes: i64) -> Duration {
    let minutes = u64::try_from(minutes)
        .ok()
        .filter(|m| *m > 0)
        .unwrap_or(DEFAULT_POLL_INTERVAL_MINUTES);
    Duration::from_secs(minutes.saturating_mul(60))
}

/// Immutable snapshot of the retention rules for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Directory to clean
    pub target_path: PathBuf,
    /// Files strictly older than this many days are eligible
    pub max_age_days: u32,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Extension allow-list (empty = all)
    pub extensions: ExtensionFilter,
    /// Removal mode applied uniformly to the run
    pub delete_mode: DeleteMode,
    /// Record skip decisions, not just deletions
    pub verbose_logging: bool,
    /// Interval between scheduled runs (already normalized)
    pub poll_interval: Duration,
}

impl RetentionPolicy {
    pub fn new(target_path: impl Into<PathBuf>, max_age_days: u32) -> Self {
        Self {
            target_path: target_path.into(),
            max_age_days,
            recursive: false,
            extensions: ExtensionFilter::default(),
            delete_mode: DeleteMode::Permanent,
            verbose_logging: false,
            poll_interval: poll_interval(DEFAULT_POLL_INTERVAL_MINUTES as i64),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_extensions<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = ExtensionFilter::new(entries);
        self
    }

    pub fn with_delete_mode(mut self, mode: DeleteMode) -> Self {
        self.delete_mode = mode;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose_logging = verbose;
        self
    }

    pub fn deletes_to_trash(&self) -> bool {
        self.delete_mode == DeleteMode::Trash
    }

    /// Cut-off time: anything modified strictly before it is expired.
    ///
    /// Saturates at the Unix epoch for absurdly large ages.
    pub fn threshold(&self, now: SystemTime) -> SystemTime {
        let age = Duration::from_secs(u64::from(self.max_age_days) * SECS_PER_DAY);
        now.checked_sub(age).unwrap_or(SystemTime::UNIX_EPOCH)
    }

    /// Whether a file last modified at `modified` is old enough to delete
    pub fn is_expired(&self, modified: SystemTime, now: SystemTime) -> bool {
        modified < self.threshold(now)
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
