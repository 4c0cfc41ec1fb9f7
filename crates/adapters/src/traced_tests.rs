// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::notify::FakeNotifyAdapter;
use crate::remove::{FakeRemover, RemoveCall};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a closure with captured tracing output
fn with_tracing<T>(f: impl FnOnce() -> T) -> (String, T) {
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (logs.contents(), result)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn traced_remover_logs_deletion_with_timing() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("old.log");
    std::fs::write(&file, "x").unwrap();

    let (logs, result) = with_tracing(|| {
        TracedRemover::new(FakeRemover::new()).remove(&file, DeleteMode::Permanent)
    });

    assert!(result.is_ok(), "remove should succeed: {:?}", result);
    assert!(logs.contains("file.remove"), "Logs:\n{}", logs);
    assert!(logs.contains("old.log"), "Logs:\n{}", logs);
    assert!(logs.contains("deleted"), "Logs:\n{}", logs);
    assert!(logs.contains("elapsed_ms"), "Logs:\n{}", logs);
}

#[test]
fn traced_remover_logs_failure() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("busy.log");
    std::fs::write(&file, "x").unwrap();
    let fake = FakeRemover::new();
    fake.lock(&file);

    let (logs, result) =
        with_tracing(|| TracedRemover::new(fake.clone()).remove(&file, DeleteMode::Trash));

    assert!(result.is_err());
    assert!(logs.contains("delete failed"), "Logs:\n{}", logs);
    assert!(logs.contains("in use by another process"), "Logs:\n{}", logs);
    assert!(file.exists());
}

#[test]
fn traced_remover_delegates_to_inner() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.tmp");
    std::fs::write(&file, "x").unwrap();
    let fake = FakeRemover::new();

    TracedRemover::new(fake.clone())
        .remove(&file, DeleteMode::Trash)
        .unwrap();

    assert_eq!(
        fake.calls(),
        vec![RemoveCall {
            path: file.clone(),
            mode: DeleteMode::Trash,
        }]
    );
    assert!(!file.exists());
}

// =============================================================================
// Notification
// =============================================================================

#[test]
fn traced_notifier_logs_send() {
    let fake = FakeNotifyAdapter::new();
    let traced = TracedNotifyAdapter::new(fake.clone());

    let (logs, result) = with_tracing(|| block_on(traced.send("hello")));

    assert!(result.is_ok());
    assert!(logs.contains("notify.send"), "Logs:\n{}", logs);
    assert!(logs.contains("sent"), "Logs:\n{}", logs);
    assert_eq!(fake.messages(), vec!["hello".to_string()]);
}

#[test]
fn traced_notifier_logs_failure_and_returns_it() {
    let fake = FakeNotifyAdapter::new();
    fake.fail_with("connection refused");
    let traced = TracedNotifyAdapter::new(fake);

    let (logs, result) = with_tracing(|| block_on(traced.send("hello")));

    assert!(matches!(result, Err(NotifyError::Transport(_))));
    assert!(logs.contains("send failed"), "Logs:\n{}", logs);
    assert!(logs.contains("connection refused"), "Logs:\n{}", logs);
}
