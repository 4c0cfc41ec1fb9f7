//! Shared helpers for the black-box specs.

use std::fs::{self, File};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

use predicates::prelude::*;

const DAY: Duration = Duration::from_secs(86_400);

/// A throwaway state directory next to an empty target folder
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Nothing configured yet
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        Self { dir }
    }

    /// Target folder configured through the CLI itself, deleting
    /// permanently so runs never touch the real trash
    pub fn configured() -> Self {
        let ws = Self::empty();
        let target = ws.target().display().to_string();
        ws.set("target_path", &target);
        ws.set("delete_to_trash", "false");
        ws
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    pub fn target(&self) -> PathBuf {
        self.dir.path().join("target")
    }

    pub fn log(&self) -> String {
        fs::read_to_string(self.state_dir().join("sweep.log")).unwrap_or_default()
    }

    /// Settings update that must succeed
    pub fn set(&self, field: &str, value: &str) {
        self.sweep().args(&["config", "set", field, value]).passes();
    }

    /// Create `rel` under the target, last modified `days` ago
    pub fn file_aged(&self, rel: &str, days: u64) -> PathBuf {
        let path = self.target().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let file = File::create(&path).unwrap();
        file.set_modified(SystemTime::now() - DAY * days as u32)
            .unwrap();
        path
    }

    pub fn sweep(&self) -> CliBuilder {
        CliBuilder {
            args: vec!["--state-dir".into(), self.state_dir().display().to_string()],
            envs: Vec::new(),
        }
    }
}

/// Command builder for the `sweep` binary
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("sweep").unwrap();
        cmd.args(&self.args)
            .env_remove("RUST_LOG")
            .env_remove("SWEEP_STATE_DIR");
        for (k, v) in &self.envs {
            cmd.env(k, v);
        }
        cmd
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        RunAssert(self.command().assert().success())
    }

    /// Run and expect a non-zero exit code
    pub fn fails(self) -> RunAssert {
        RunAssert(self.command().assert().failure())
    }
}

pub struct RunAssert(assert_cmd::assert::Assert);

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            predicate::str::contains(expected).eval(&stdout),
            "stdout does not contain {:?}\nstdout:\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout unexpectedly contains {:?}\nstdout:\n{}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            predicate::str::contains(expected).eval(&stderr),
            "stderr does not contain {:?}\nstderr:\n{}",
            expected,
            stderr
        );
        self
    }

    /// Compare stdout exactly, with a readable diff on mismatch
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }
}
