// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File removal adapters

mod system;

pub use system::SystemRemover;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRemover, RemoveCall};

use std::path::{Path, PathBuf};
use sweep_core::DeleteMode;
use thiserror::Error;

/// Errors from removing a single file
#[derive(Debug, Error)]
pub enum RemoveError {
    #[error("failed to delete {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to move {path} to trash: {message}")]
    Trash { path: PathBuf, message: String },
}

/// Adapter that deletes one file.
///
/// Removal is blocking; callers run it on a blocking-capable thread.
pub trait FileRemover: Send + Sync {
    fn remove(&self, path: &Path, mode: DeleteMode) -> Result<(), RemoveError>;
}

impl<R: FileRemover + ?Sized> FileRemover for &R {
    fn remove(&self, path: &Path, mode: DeleteMode) -> Result<(), RemoveError> {
        (**self).remove(path, mode)
    }
}
