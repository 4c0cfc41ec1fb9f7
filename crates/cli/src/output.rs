// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use std::fmt::Write;
use std::path::Path;
use sweep_core::{RunSummary, Settings};
use sweep_engine::ExtensionCount;

/// Human summary of an interactive run
pub fn summary(summary: &RunSummary, target: &Path) -> String {
    let mut out = String::new();
    if let Some(reason) = &summary.abort_reason {
        let _ = writeln!(out, "Cleanup of {} aborted: {}", target.display(), reason);
        return out;
    }

    let _ = writeln!(out, "Cleaned {}", target.display());
    let _ = writeln!(out, "  Deleted:  {}", summary.files_deleted);
    let _ = writeln!(out, "  Examined: {}", summary.files_examined);
    let _ = writeln!(
        out,
        "  Skipped:  {} ({} by extension, {} too recent)",
        summary.skipped_extension + summary.skipped_recent,
        summary.skipped_extension,
        summary.skipped_recent
    );
    if !summary.errors.is_empty() {
        let _ = writeln!(out, "  Failed:   {}", summary.errors.len());
        for failure in &summary.errors {
            let _ = writeln!(out, "    {}: {}", failure.path.display(), failure.message);
        }
    }
    out
}

/// Extension table, most common first
pub fn census(counts: &[ExtensionCount]) -> String {
    if counts.is_empty() {
        return "No files with an extension\n".to_string();
    }

    let width = counts
        .iter()
        .map(|c| c.extension.len())
        .max()
        .unwrap_or(0)
        .max("EXTENSION".len());
    let mut out = format!("{:<width$}  FILES\n", "EXTENSION");
    for count in counts {
        let _ = writeln!(out, "{:<width$}  {}", count.extension, count.count);
    }
    out
}

/// Settings as TOML with the bot token masked
pub fn settings(settings: &Settings) -> Result<String, sweep_core::ConfigError> {
    let mut shown = settings.clone();
    if !shown.telegram_bot_token.is_empty() {
        shown.telegram_bot_token = "***".to_string();
    }
    shown.to_toml()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
