//! Test harness utilities for envex integration tests.
//!
//! Provides an isolated temp directory for env files and helpers for
//! invoking the binary and inspecting its output.
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Env files are written into the temp directory and the binary runs
/// with it as the working directory, so tests can refer to files by
/// bare name.
pub struct TestEnv {
    /// Temporary directory holding the test's env files
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write an env file into the test directory and return its path.
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write env file");
        path
    }

    /// Create an envex command rooted in the test directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("envex").expect("failed to find envex binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `envex <files...> -- <command...>`.
    pub fn exec(&self, files: &[&str], command: &[&str]) -> Output {
        self.cmd()
            .args(files)
            .arg("--")
            .args(command)
            .output()
            .expect("failed to run envex")
    }
}

/// Assert the command exited successfully, printing output on failure.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        stdout(output),
        stderr(output)
    );
}

/// Assert the command exited with a non-zero status.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure, got success\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Captured stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Captured stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
