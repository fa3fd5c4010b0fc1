//! Shared testing harness for `nahual` CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated work directory plus a fake runner that records what it receives.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    record_dir: PathBuf,
    runner_path: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let record_dir = root.path().join("record");
        let bin_dir = root.path().join("bin");
        for dir in [&work_dir, &record_dir, &bin_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        // The binary sees the canonical cwd, so compare against that.
        let work_dir = work_dir.canonicalize().expect("Failed to canonicalize work directory");

        let runner_path = bin_dir.join("fake-runner");
        let script = format!(
            r#"#!/bin/sh
record="{}"
cp "$NAHUAL_INVOCATION" "$record/invocation.json"
printf '%s' "$NODE_ENV" > "$record/node_env"
printf '%s' "$PORT" > "$record/port"
if [ -n "$FAKE_RUNNER_SIGNAL" ]; then
    printf '%s' "$FAKE_RUNNER_SIGNAL" > "$NAHUAL_COMPLETION"
fi
exit "${{FAKE_RUNNER_EXIT:-0}}"
"#,
            record_dir.display()
        );
        fs::write(&runner_path, script).expect("Failed to write fake runner");
        let mut perms = fs::metadata(&runner_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&runner_path, perms).expect("Failed to set permissions");

        Self { root, work_dir, record_dir, runner_path }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the fake runner script.
    pub(crate) fn runner_path(&self) -> &Path {
        &self.runner_path
    }

    /// Build a command for invoking the compiled `nahual` binary with the fake runner.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nahual").expect("Failed to locate nahual binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env("NAHUAL_RUNNER", &self.runner_path)
            .env_remove("NODE_ENV")
            .env_remove("PORT")
            .env_remove("NAHUAL_LOG")
            .env_remove("FAKE_RUNNER_SIGNAL")
            .env_remove("FAKE_RUNNER_EXIT");
        cmd
    }

    /// Write a file relative to the work directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Whether the fake runner has been invoked.
    pub(crate) fn runner_invoked(&self) -> bool {
        self.record_dir.join("invocation.json").exists()
    }

    /// The invocation JSON the fake runner received.
    pub(crate) fn invocation(&self) -> Value {
        let content = fs::read_to_string(self.record_dir.join("invocation.json"))
            .expect("Runner was not invoked");
        serde_json::from_str(&content).expect("Invocation is not valid JSON")
    }

    /// Prelude lines the fake runner received.
    pub(crate) fn prelude_lines(&self) -> Vec<String> {
        self.invocation()["config"]["prelude"]
            .as_str()
            .expect("prelude should be a string")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Value of an environment variable as seen by the fake runner.
    pub(crate) fn runner_env(&self, name: &str) -> String {
        fs::read_to_string(self.record_dir.join(name)).expect("Runner did not record variable")
    }
}
