// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of a single cleanup run

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A file that could not be deleted; the scan carried on past it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Run summary, produced once per scan and never merged with another.
///
/// Invariant: `files_deleted + errors.len() <= files_examined`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files yielded by enumeration
    pub files_examined: usize,
    /// Successful deletions
    pub files_deleted: usize,
    /// Files skipped because of their extension
    pub skipped_extension: usize,
    /// Files skipped because they are not old enough
    pub skipped_recent: usize,
    /// Per-file failures, in scan order
    pub errors: Vec<FileFailure>,
    /// Set when enumeration failed and the scan did not run
    pub abort_reason: Option<String>,
    /// Wall time spent on the run
    pub elapsed: Duration,
}

impl RunSummary {
    /// Summary of a scan that never got past enumeration
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self {
            abort_reason: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn scan_aborted(&self) -> bool {
        self.abort_reason.is_some()
    }

    pub fn record_deleted(&mut self) {
        self.files_deleted += 1;
    }

    pub fn record_failure(&mut self, path: &Path, message: impl Into<String>) {
        self.errors.push(FileFailure {
            path: path.to_path_buf(),
            message: message.into(),
        });
    }

    /// Whether the caller should forward a report to the notifier
    pub fn is_reportable(&self) -> bool {
        self.files_deleted > 0 || self.scan_aborted()
    }

    /// Markdown message for the notification channel
    pub fn notification_text(&self, target: &Path) -> String {
        if let Some(reason) = &self.abort_reason {
            return format!(
                "⚠️ *Cleanup aborted*\n📂 Folder: `{}`\n{}",
                target.display(),
                reason
            );
        }

        let mut text = format!(
            "🧹 *Cleanup finished*\n📂 Folder: `{}`\n🗑️ Files deleted: *{}*",
            target.display(),
            self.files_deleted
        );
        if !self.errors.is_empty() {
            text.push_str(&format!("\n❗ Failed: *{}*", self.errors.len()));
        }
        text
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(reason) = &self.abort_reason {
            return write!(f, "scan aborted: {}", reason);
        }
        write!(
            f,
            "examined {}, deleted {}, failed {}, skipped {} ({} by extension, {} too recent)",
            self.files_examined,
            self.files_deleted,
            self.errors.len(),
            self.skipped_extension + self.skipped_recent,
            self.skipped_extension,
            self.skipped_recent
        )
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
