// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Extension census of the target folder

use crate::error::SweepError;
use crate::output;
use anyhow::Result;
use sweep_core::ConfigStore;
use sweep_engine::ScanError;

pub async fn handle(store: &ConfigStore) -> Result<()> {
    let settings = store.load()?;
    if !settings.has_target() {
        return Err(SweepError::no_target().into());
    }

    let target = settings.target_path();
    let recursive = settings.recursive;
    let scan_root = target.clone();
    let counts = tokio::task::spawn_blocking(move || {
        sweep_engine::extension_census(&scan_root, recursive)
    })
    .await?;

    match counts {
        Ok(counts) => {
            print!("{}", output::census(&counts));
            Ok(())
        }
        Err(ScanError::NotFound(_)) => Err(SweepError::target_missing(&target).into()),
        Err(e) => Err(e.into()),
    }
}
