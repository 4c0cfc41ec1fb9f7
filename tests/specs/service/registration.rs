//! Service registration and service-mode specs

use crate::prelude::*;

#[test]
fn install_refuses_without_a_target() {
    let ws = Workspace::empty();
    let units = ws.state_dir().join("units");

    ws.sweep()
        .args(&["install"])
        .env("XDG_CONFIG_HOME", &units.display().to_string())
        .fails()
        .stderr_has("No target folder configured");

    assert!(!units.join("systemd/user/sweep.service").exists());
}

#[test]
fn status_reports_not_installed() {
    let ws = Workspace::empty();
    let units = ws.state_dir().join("units");

    ws.sweep()
        .args(&["status"])
        .env("XDG_CONFIG_HOME", &units.display().to_string())
        .passes()
        .stdout_has("sweep: not installed");
}

#[test]
fn uninstall_without_install_fails() {
    let ws = Workspace::empty();
    let units = ws.state_dir().join("units");

    ws.sweep()
        .args(&["uninstall"])
        .env("XDG_CONFIG_HOME", &units.display().to_string())
        .fails()
        .stderr_has("not installed");
}

#[test]
fn notify_test_without_credentials_fails() {
    Workspace::empty()
        .sweep()
        .args(&["notify-test"])
        .fails()
        .stderr_has("Notifications are not configured");
}

#[test]
fn service_without_a_target_refuses_to_start() {
    let ws = Workspace::empty();

    ws.sweep().args(&["service"]).fails();

    let log = ws.log();
    assert!(log.contains("--- sweep: starting (pid: "), "log:\n{}", log);
    assert!(log.contains("failed to start"), "log:\n{}", log);
}

#[test]
fn service_with_a_missing_target_refuses_to_start() {
    let ws = Workspace::configured();
    std::fs::remove_dir(ws.target()).unwrap();

    ws.sweep().args(&["service"]).fails();

    assert!(ws.log().contains("failed to start"));
}
