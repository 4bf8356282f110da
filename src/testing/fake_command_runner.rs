use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{CommandRunner, command_line};

/// Scripted stand-in for external tools. Clones share recorded calls.
#[derive(Clone, Default)]
pub struct FakeCommandRunner {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub output: Arc<Mutex<String>>,
    pub failures: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stdout returned by every successful call.
    pub fn with_output(self, output: &str) -> Self {
        *self.output.lock().unwrap() = output.to_string();
        self
    }

    /// Fail any call whose command line contains `needle`.
    pub fn fail_when(self, needle: &str, details: &str) -> Self {
        self.failures.lock().unwrap().push((needle.to_string(), details.to_string()));
        self
    }

    /// Command lines received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, command: &str, args: &[&str]) -> Result<String, AppError> {
        let line = command_line(command, args);
        self.calls.lock().unwrap().push(line.clone());

        let failure = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .find(|(needle, _)| line.contains(needle.as_str()))
            .map(|(_, details)| details.clone());
        if let Some(details) = failure {
            return Err(AppError::ToolFailed { command: line, details });
        }

        Ok(self.output.lock().unwrap().clone())
    }
}
