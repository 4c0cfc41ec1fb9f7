// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sweep cleanup engine
//!
//! Enumerates a target directory, decides which files have outlived the
//! retention policy and removes them, one file at a time. Notification
//! delivery is left to callers through [`report`].

mod census;
mod cleanup;
mod error;
mod report;
mod scan;

pub use census::{extension_census, ExtensionCount};
pub use cleanup::CleanupEngine;
pub use error::{FileError, ScanError};
pub use report::report;
pub use scan::enumerate;
