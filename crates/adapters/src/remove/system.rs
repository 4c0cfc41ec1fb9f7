// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Removal through the real filesystem and recycle bin

use super::{FileRemover, RemoveError};
use std::path::Path;
use sweep_core::DeleteMode;

/// Deletes with `remove_file`, or moves to the platform trash
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRemover;

impl SystemRemover {
    pub fn new() -> Self {
        Self
    }
}

impl FileRemover for SystemRemover {
    fn remove(&self, path: &Path, mode: DeleteMode) -> Result<(), RemoveError> {
        match mode {
            DeleteMode::Permanent => std::fs::remove_file(path).map_err(|source| RemoveError::Io {
                path: path.to_path_buf(),
                source,
            }),
            DeleteMode::Trash => trash::delete(path).map_err(|e| RemoveError::Trash {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "system_tests.rs"]
mod tests;
