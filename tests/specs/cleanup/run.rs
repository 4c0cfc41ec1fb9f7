//! Interactive cleanup specs

use crate::prelude::*;
use std::fs;

#[test]
fn without_a_target_nothing_runs() {
    Workspace::empty()
        .sweep()
        .fails()
        .stderr_has("No target folder configured")
        .stderr_has("sweep config set target_path");
}

#[test]
fn old_files_are_deleted_and_recent_ones_kept() {
    let ws = Workspace::configured();
    ws.set("max_age_days", "7");
    let old = ws.file_aged("a.log", 10);
    let recent = ws.file_aged("b.log", 3);

    ws.sweep()
        .args(&["run"])
        .passes()
        .stdout_has("Deleted:  1")
        .stdout_has("Examined: 2")
        .stdout_has("1 too recent");

    assert!(!old.exists());
    assert!(recent.exists());
}

#[test]
fn run_is_the_default_command() {
    let ws = Workspace::configured();
    let old = ws.file_aged("a.log", 30);

    ws.sweep().passes().stdout_has("Deleted:  1");

    assert!(!old.exists());
}

#[test]
fn extension_filter_limits_deletion() {
    let ws = Workspace::configured();
    ws.set("max_age_days", "7");
    ws.set("extensions", "tmp");
    let tmp = ws.file_aged("a.tmp", 10);
    let log = ws.file_aged("a.log", 10);

    ws.sweep()
        .passes()
        .stdout_has("Deleted:  1")
        .stdout_has("1 by extension");

    assert!(!tmp.exists());
    assert!(log.exists());
}

#[test]
fn subfolders_are_only_cleaned_when_recursive() {
    let ws = Workspace::configured();
    ws.set("recursive", "false");
    let nested = ws.file_aged("sub/old.log", 30);

    ws.sweep().passes().stdout_has("Examined: 0");
    assert!(nested.exists());

    ws.set("recursive", "true");
    ws.sweep().passes().stdout_has("Deleted:  1");
    assert!(!nested.exists());
    assert!(ws.target().join("sub").is_dir());
}

#[test]
fn second_run_finds_nothing_to_delete() {
    let ws = Workspace::configured();
    ws.file_aged("a.log", 30);

    ws.sweep().passes().stdout_has("Deleted:  1");
    ws.sweep().passes().stdout_has("Deleted:  0");
}

#[test]
fn missing_target_aborts_without_deleting() {
    let ws = Workspace::configured();
    fs::remove_dir(ws.target()).unwrap();

    ws.sweep()
        .fails()
        .stdout_has("aborted")
        .stderr_has("Cleanup aborted before deleting anything");
}

#[test]
fn runs_are_written_to_the_log_file() {
    let ws = Workspace::configured();
    ws.file_aged("a.log", 30);

    ws.sweep().passes();

    let log = ws.log();
    assert!(log.contains("cleanup started"), "log:\n{}", log);
    assert!(log.contains("cleanup finished"), "log:\n{}", log);
    assert!(log.contains("deleted"), "log:\n{}", log);
}
