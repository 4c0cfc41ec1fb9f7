//! Help and usage specs

use crate::prelude::*;

#[test]
fn help_lists_every_command() {
    let ws = Workspace::empty();
    let out = ws.sweep().args(&["--help"]).passes();
    for command in [
        "run",
        "service",
        "install",
        "uninstall",
        "status",
        "extensions",
        "notify-test",
        "config",
    ] {
        assert!(out.stdout().contains(command), "missing {}", command);
    }
}

#[test]
fn version_is_printed() {
    Workspace::empty()
        .sweep()
        .args(&["--version"])
        .passes()
        .stdout_has("sweep ");
}

#[test]
fn unknown_command_fails() {
    Workspace::empty()
        .sweep()
        .args(&["defragment"])
        .fails()
        .stderr_has("unrecognized subcommand");
}

#[test]
fn config_set_help_names_the_fields() {
    Workspace::empty()
        .sweep()
        .args(&["config", "set", "--help"])
        .passes()
        .stdout_has("max_age_days");
}
