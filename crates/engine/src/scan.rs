// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory enumeration

use crate::ScanError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the regular files under `root`.
///
/// The listing is collected in full before returning: any error while
/// walking fails the whole enumeration, so callers never act on a partial
/// listing. Symlinks are neither followed nor returned. Order is whatever
/// the filesystem yields.
pub fn enumerate(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    validate_root(root)?;

    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Enumerate {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn validate_root(root: &Path) -> Result<(), ScanError> {
    if root.as_os_str().is_empty() {
        return Err(ScanError::NoTarget);
    }
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(root.to_path_buf())),
        Err(_) => Err(ScanError::NotFound(root.to_path_buf())),
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
