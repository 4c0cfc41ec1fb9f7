// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the cleanup engine
//!
//! The two kinds never convert into each other: a [`ScanError`] ends the
//! run before any file is touched, a [`FileError`] is recorded and the
//! run moves on to the next file.

use std::path::PathBuf;
use sweep_adapters::RemoveError;
use thiserror::Error;

/// Failure that stops a scan before it starts deleting
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no target folder configured")]
    NoTarget,
    #[error("target folder does not exist: {0}")]
    NotFound(PathBuf),
    #[error("target is not a folder: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to enumerate {path}: {source}")]
    Enumerate {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Failure confined to one file
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read modification time of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Remove(#[from] RemoveError),
}
