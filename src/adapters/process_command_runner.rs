use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::{CommandRunner, command_line};

/// Runs external tools as child processes and waits for them to exit.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner {
    cwd: Option<PathBuf>,
}

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command from `cwd` instead of the inherited working directory.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: Some(cwd.into()) }
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, command: &str, args: &[&str]) -> Result<String, AppError> {
        let cmdline = command_line(command, args);
        let mut process = Command::new(command);
        process.args(args);
        if let Some(cwd) = &self.cwd {
            process.current_dir(cwd);
        }

        debug!(command = %cmdline, "spawning external tool");
        let output = process
            .output()
            .map_err(|e| AppError::ToolFailed { command: cmdline.clone(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let details = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                match output.status.code() {
                    Some(code) => format!("exited with status {}", code),
                    None => "terminated by signal".to_string(),
                }
            };
            warn!(command = %cmdline, status = ?output.status.code(), "external tool failed");
            return Err(AppError::ToolFailed { command: cmdline, details });
        }

        debug!(command = %cmdline, "external tool finished");
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        let runner = ProcessCommandRunner::new();
        let out = runner.run("echo", &["Test", "0"]).unwrap();
        assert_eq!(out, "Test 0");
    }

    #[test]
    fn non_zero_exit_is_tool_failure() {
        let runner = ProcessCommandRunner::new();
        let err = runner.run("false", &[]).unwrap_err();
        match err {
            AppError::ToolFailed { command, details } => {
                assert_eq!(command, "false");
                assert_eq!(details, "exited with status 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn stderr_becomes_the_diagnostic() {
        let runner = ProcessCommandRunner::new();
        let err = runner.run("sh", &["-c", "echo boom >&2; exit 3"]).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn missing_binary_is_tool_failure() {
        let runner = ProcessCommandRunner::new();
        let err = runner.run("kn-workflow-definitely-missing-tool", &[]).unwrap_err();
        assert!(matches!(err, AppError::ToolFailed { .. }));
    }

    #[test]
    fn runs_inside_configured_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let runner = ProcessCommandRunner::in_dir(dir.path());
        let out = runner.run("pwd", &[]).unwrap();
        let expected = dir.path().canonicalize().unwrap();
        assert_eq!(PathBuf::from(out).canonicalize().unwrap(), expected);
    }
}
