//! Shared testing utilities for kn-workflow CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let original_cwd = env::current_dir().expect("Failed to get current directory");

        Self { root, work_dir, original_cwd }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `kn-workflow` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kn-workflow").expect("Failed to locate kn-workflow binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write `.kn-workflow.toml` pointing kubectl and maven at the given executables.
    pub fn configure_tools(&self, kubectl: &str, maven: &str) {
        let content = format!("[tools]\nkubectl = \"{}\"\nmaven = \"{}\"\n", kubectl, maven);
        fs::write(self.work_dir.join(".kn-workflow.toml"), content)
            .expect("Failed to write plugin config");
    }

    /// Create `<work>/<dir>/<file>` with the given content.
    pub fn write_manifest(&self, dir: &str, file: &str, content: &str) {
        let target = self.work_dir.join(dir);
        fs::create_dir_all(&target).expect("Failed to create manifest directory");
        fs::write(target.join(file), content).expect("Failed to write manifest");
    }

    /// Assert a path relative to the work directory exists.
    pub fn assert_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(path.exists(), "{} should exist", path.display());
    }

    /// Assert a path relative to the work directory does not exist.
    pub fn assert_not_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(!path.exists(), "{} should not exist", path.display());
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read file")
    }

    /// Execute a closure after temporarily switching into the work directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }

    /// Root of the temporary tree, outside the work directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_cwd);
    }
}
