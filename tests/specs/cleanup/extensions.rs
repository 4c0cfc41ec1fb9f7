//! Extension census specs

use crate::prelude::*;

#[test]
fn census_counts_files_by_extension() {
    let ws = Workspace::configured();
    ws.file_aged("a.log", 0);
    ws.file_aged("b.LOG", 0);
    ws.file_aged("c.tmp", 0);
    ws.file_aged("README", 0);

    ws.sweep()
        .args(&["extensions"])
        .passes()
        .stdout_eq("EXTENSION  FILES\n.log       2\n.tmp       1\n");
}

#[test]
fn empty_target_has_no_extensions() {
    Workspace::configured()
        .sweep()
        .args(&["extensions"])
        .passes()
        .stdout_has("No files with an extension");
}

#[test]
fn census_skips_subfolders_unless_recursive() {
    let ws = Workspace::configured();
    ws.set("recursive", "false");
    ws.file_aged("top.log", 0);
    ws.file_aged("sub/nested.tmp", 0);

    ws.sweep()
        .args(&["extensions"])
        .passes()
        .stdout_has(".log")
        .stdout_lacks(".tmp");
}

#[test]
fn census_never_deletes() {
    let ws = Workspace::configured();
    let old = ws.file_aged("ancient.log", 365);

    ws.sweep().args(&["extensions"]).passes();

    assert!(old.exists());
}

#[test]
fn census_needs_a_target() {
    Workspace::empty()
        .sweep()
        .args(&["extensions"])
        .fails()
        .stderr_has("No target folder configured");
}
