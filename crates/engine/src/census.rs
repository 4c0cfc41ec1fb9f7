// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Extension census: which kinds of files live in the target folder

use crate::{scan, ScanError};
use std::collections::HashMap;
use std::path::Path;
use sweep_core::policy::extension_of;

/// Number of files sharing one lower-cased extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCount {
    pub extension: String,
    pub count: usize,
}

/// Count files per extension, most common first.
///
/// Files without an extension are left out. Ties are ordered by extension
/// so the output is stable.
pub fn extension_census(root: &Path, recursive: bool) -> Result<Vec<ExtensionCount>, ScanError> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for path in scan::enumerate(root, recursive)? {
        if let Some(ext) = extension_of(&path) {
            *counts.entry(ext).or_default() += 1;
        }
    }

    let mut census: Vec<ExtensionCount> = counts
        .into_iter()
        .map(|(extension, count)| ExtensionCount { extension, count })
        .collect();
    census.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.extension.cmp(&b.extension)));
    Ok(census)
}

#[cfg(test)]
#[path = "census_tests.rs"]
mod tests;
