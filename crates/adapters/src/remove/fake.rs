// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake file remover for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FileRemover, RemoveError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use sweep_core::DeleteMode;

/// Recorded removal attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCall {
    pub path: PathBuf,
    pub mode: DeleteMode,
}

#[derive(Default)]
struct FakeRemoverState {
    calls: Vec<RemoveCall>,
    locked: HashSet<PathBuf>,
}

/// Records every attempt and unlinks the file on success, so trash mode can
/// be exercised without touching the user's recycle bin.
#[derive(Clone, Default)]
pub struct FakeRemover {
    inner: Arc<Mutex<FakeRemoverState>>,
}

impl FakeRemover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make removal of `path` fail as if the file were in use
    pub fn lock(&self, path: impl Into<PathBuf>) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .locked
            .insert(path.into());
    }

    /// All removal attempts, including failed ones
    pub fn calls(&self) -> Vec<RemoveCall> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }
}

impl FileRemover for FakeRemover {
    fn remove(&self, path: &Path, mode: DeleteMode) -> Result<(), RemoveError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(RemoveCall {
            path: path.to_path_buf(),
            mode,
        });

        if inner.locked.contains(path) {
            return Err(RemoveError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "file is in use by another process",
                ),
            });
        }

        std::fs::remove_file(path).map_err(|source| RemoveError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
