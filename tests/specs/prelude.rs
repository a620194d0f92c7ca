// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for running the binary against a scratch state directory

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub use serde_json::json;

/// Exit code for rejected input
pub const EXIT_INVALID: i32 = 2;

fn base_command() -> Command {
    let mut cmd = Command::cargo_bin("turno").unwrap();
    cmd.env_remove("TURNO_STATE_DIR")
        .env_remove("XDG_STATE_HOME")
        .env_remove("TURNO_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// The binary with no state directory configured
pub fn cli() -> Run {
    Run { cmd: base_command() }
}

/// A scratch state directory
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn state_dir(&self) -> PathBuf {
        self.path().join("state")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.state_dir().join("db/data.json")
    }

    /// The binary with `TURNO_STATE_DIR` pointing into this project
    pub fn turno(&self) -> Run {
        let mut cmd = base_command();
        cmd.env("TURNO_STATE_DIR", self.state_dir());
        Run { cmd }
    }

    /// Write `content` to `rel` under the project root, creating parents
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Seed the live snapshot directly
    pub fn snapshot_file(&self, content: &str) {
        self.file("state/db/data.json", content);
    }

    pub fn snapshot(&self) -> Value {
        serde_json::from_slice(&std::fs::read(self.snapshot_path()).unwrap()).unwrap()
    }
}

pub struct Run {
    cmd: Command,
}

impl Run {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.cmd.write_stdin(input);
        self
    }

    fn output(mut self) -> Output {
        let out = self.cmd.output().unwrap();
        Output {
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }

    /// Run and assert exit code 0
    pub fn passes(self) -> Output {
        let out = self.output();
        assert_eq!(out.code, Some(0), "expected success\nstdout: {}\nstderr: {}", out.stdout, out.stderr);
        out
    }

    /// Run and assert a non-zero exit code
    pub fn fails(self) -> Output {
        let out = self.output();
        assert_ne!(out.code, Some(0), "expected failure\nstdout: {}", out.stdout);
        out
    }

    pub fn fails_with(self, code: i32) -> Output {
        let out = self.output();
        assert_eq!(out.code, Some(code), "stdout: {}\nstderr: {}", out.stdout, out.stderr);
        out
    }
}

pub struct Output {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    pub fn stdout_has(&self, needle: &str) -> &Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(&self, needle: &str) -> &Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(&self, expected: &str) -> &Self {
        similar_asserts::assert_eq!(self.stdout.trim_end(), expected);
        self
    }

    pub fn stdout_json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap()
    }

    /// Each stderr line that parses as a JSON object
    pub fn events(&self) -> Vec<Value> {
        self.stderr
            .lines()
            .filter_map(|l| serde_json::from_str::<Value>(l).ok())
            .filter(Value::is_object)
            .collect()
    }
}
