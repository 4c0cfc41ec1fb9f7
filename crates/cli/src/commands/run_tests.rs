// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::fs::File;
use std::time::{Duration, SystemTime};
use sweep_adapters::{FakeNotifyAdapter, FakeRemover};
use tempfile::TempDir;

const DAY: Duration = Duration::from_secs(86_400);

fn settings_for(dir: &TempDir) -> Settings {
    Settings {
        target_path: dir.path().display().to_string(),
        max_age_days: 7,
        ..Settings::default()
    }
}

fn file_aged(dir: &TempDir, name: &str, age: Duration) -> std::path::PathBuf {
    let path = dir.path().join(name);
    File::create(&path)
        .unwrap()
        .set_modified(SystemTime::now() - age)
        .unwrap();
    path
}

#[tokio::test]
async fn missing_target_setting_is_an_error() {
    let notifier = FakeNotifyAdapter::new();

    let err = run_once(&Settings::default(), FakeRemover::new(), SystemClock, &notifier)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("No target folder configured"));
}

#[tokio::test]
async fn deleting_run_is_reported() {
    let dir = TempDir::new().unwrap();
    let old = file_aged(&dir, "old.log", 10 * DAY);
    let fresh = file_aged(&dir, "fresh.log", DAY);
    let notifier = FakeNotifyAdapter::new();

    let summary = run_once(&settings_for(&dir), FakeRemover::new(), SystemClock, &notifier)
        .await
        .unwrap();

    assert_eq!(summary.files_deleted, 1);
    assert!(!old.exists());
    assert!(fresh.exists());
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn quiet_run_sends_nothing() {
    let dir = TempDir::new().unwrap();
    file_aged(&dir, "fresh.log", DAY);
    let notifier = FakeNotifyAdapter::new();

    let summary = run_once(&settings_for(&dir), FakeRemover::new(), SystemClock, &notifier)
        .await
        .unwrap();

    assert_eq!(summary.files_deleted, 0);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn aborted_run_comes_back_in_the_summary() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        target_path: dir.path().join("gone").display().to_string(),
        ..Settings::default()
    };
    let notifier = FakeNotifyAdapter::new();

    let summary = run_once(&settings, FakeRemover::new(), SystemClock, &notifier)
        .await
        .unwrap();

    assert!(summary.scan_aborted());
    assert!(notifier.messages().is_empty());
}
