//! Settings specs

use crate::prelude::*;

#[test]
fn path_is_inside_the_state_dir() {
    let ws = Workspace::empty();
    let expected = ws.state_dir().join("config.toml");

    ws.sweep()
        .args(&["config", "path"])
        .passes()
        .stdout_has(&expected.display().to_string());
}

#[test]
fn show_prints_defaults_before_anything_is_saved() {
    Workspace::empty()
        .sweep()
        .args(&["config", "show"])
        .passes()
        .stdout_has("max_age_days = 7")
        .stdout_has("poll_interval_minutes = 60");
}

#[test]
fn set_is_persisted() {
    let ws = Workspace::empty();

    ws.sweep()
        .args(&["config", "set", "max_age_days", "14"])
        .passes()
        .stdout_has("max_age_days = 14");

    ws.sweep()
        .args(&["config", "show"])
        .passes()
        .stdout_has("max_age_days = 14");
}

#[test]
fn bot_token_is_masked() {
    let ws = Workspace::empty();

    ws.sweep()
        .args(&["config", "set", "telegram_bot_token", "123:secret"])
        .passes()
        .stdout_lacks("secret");

    ws.sweep()
        .args(&["config", "show"])
        .passes()
        .stdout_lacks("123:secret")
        .stdout_has("***");
}

#[test]
fn unknown_field_is_rejected() {
    Workspace::empty()
        .sweep()
        .args(&["config", "set", "colour", "blue"])
        .fails()
        .stderr_has("unknown setting");
}

#[test]
fn invalid_value_is_rejected() {
    Workspace::empty()
        .sweep()
        .args(&["config", "set", "max_age_days", "soon"])
        .fails()
        .stderr_has("invalid value for max_age_days");
}

#[test]
fn target_must_exist() {
    let ws = Workspace::empty();
    let missing = ws.target().join("missing");

    ws.sweep()
        .args(&["config", "set", "target_path", &missing.display().to_string()])
        .fails()
        .stderr_has("Target folder does not exist");
}

#[test]
fn state_dir_can_come_from_the_environment() {
    let ws = Workspace::empty();
    let state = ws.state_dir().display().to_string();

    let mut cmd = assert_cmd::Command::cargo_bin("sweep").unwrap();
    cmd.env("SWEEP_STATE_DIR", &state)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicates::str::contains(state));
}
