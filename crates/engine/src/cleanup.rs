// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One cleanup run over a retention policy snapshot

use crate::{scan, FileError};
use std::path::Path;
use std::time::{Instant, SystemTime};
use sweep_adapters::FileRemover;
use sweep_core::{Clock, RetentionPolicy, RunSummary};
use tracing::{debug, error, info, warn};

/// What happened to one file
enum Outcome {
    Deleted,
    SkippedExtension,
    SkippedRecent,
}

/// Applies a retention policy to the filesystem
pub struct CleanupEngine<R, C> {
    remover: R,
    clock: C,
}

impl<R, C> CleanupEngine<R, C>
where
    R: FileRemover,
    C: Clock,
{
    pub fn new(remover: R, clock: C) -> Self {
        Self { remover, clock }
    }

    /// Run one scan and report what it did.
    ///
    /// Never fails: enumeration problems come back as an aborted summary
    /// and per-file problems as entries in `errors`.
    pub fn run(&self, policy: &RetentionPolicy) -> RunSummary {
        let started = Instant::now();
        let target = policy.target_path.as_path();

        info!(
            folder = %target.display(),
            max_age_days = policy.max_age_days,
            recursive = policy.recursive,
            mode = %policy.delete_mode,
            "cleanup started"
        );

        let files = match scan::enumerate(target, policy.recursive) {
            Ok(files) => files,
            Err(e) => {
                warn!(folder = %target.display(), error = %e, "scan aborted");
                let mut summary = RunSummary::aborted(e.to_string());
                summary.elapsed = started.elapsed();
                return summary;
            }
        };

        let now = self.clock.now();
        let mut summary = RunSummary::default();

        for path in &files {
            summary.files_examined += 1;
            match self.process(path, policy, now) {
                Ok(Outcome::Deleted) => summary.record_deleted(),
                Ok(Outcome::SkippedExtension) => summary.skipped_extension += 1,
                Ok(Outcome::SkippedRecent) => summary.skipped_recent += 1,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "failed to delete file");
                    summary.record_failure(path, e.to_string());
                }
            }
        }

        summary.elapsed = started.elapsed();
        info!(
            folder = %target.display(),
            examined = summary.files_examined,
            deleted = summary.files_deleted,
            failed = summary.errors.len(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "cleanup finished"
        );
        summary
    }

    fn process(
        &self,
        path: &Path,
        policy: &RetentionPolicy,
        now: SystemTime,
    ) -> Result<Outcome, FileError> {
        if !policy.extensions.matches(path) {
            if policy.verbose_logging {
                debug!(path = %path.display(), "skipped: extension not selected");
            }
            return Ok(Outcome::SkippedExtension);
        }

        let modified = std::fs::symlink_metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|source| FileError::Metadata {
                path: path.to_path_buf(),
                source,
            })?;

        if !policy.is_expired(modified, now) {
            if policy.verbose_logging {
                debug!(path = %path.display(), "skipped: not old enough");
            }
            return Ok(Outcome::SkippedRecent);
        }

        self.remover.remove(path, policy.delete_mode)?;
        info!(path = %path.display(), mode = %policy.delete_mode, "deleted file");
        Ok(Outcome::Deleted)
    }
}

#[cfg(test)]
#[path = "cleanup_tests.rs"]
mod tests;
