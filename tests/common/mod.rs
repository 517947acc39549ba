//! Shared testing utilities for promptgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `promptgen` binary in the work directory.
    ///
    /// Stdin is not a terminal, so no command ever prompts.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptgen").expect("Failed to locate promptgen binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("PROMPTGEN_NO_INPUT")
            .env_remove("PROMPTGEN_LOG");
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Failed to read output file")
    }
}
