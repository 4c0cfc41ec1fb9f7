// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;

#[test]
fn fake_remover_records_and_deletes() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.log");
    std::fs::write(&file, "x").unwrap();

    let remover = FakeRemover::new();
    remover.remove(&file, DeleteMode::Trash).unwrap();

    assert!(!file.exists());
    assert_eq!(
        remover.calls(),
        vec![RemoveCall {
            path: file,
            mode: DeleteMode::Trash
        }]
    );
}

#[test]
fn locked_file_fails_and_survives() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("busy.log");
    std::fs::write(&file, "x").unwrap();

    let remover = FakeRemover::new();
    remover.lock(&file);

    let err = remover.remove(&file, DeleteMode::Permanent).unwrap_err();
    assert!(err.to_string().contains("in use"));
    assert!(file.exists());
    assert_eq!(remover.calls().len(), 1);
}
