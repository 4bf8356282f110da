//! Project identity and extension list for `create`.

use std::fmt;

use super::AppError;

/// Default project name used by the CLI when `--name` is omitted.
pub const DEFAULT_PROJECT_NAME: &str = "new-project";

/// Raw input for the `create` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub project_name: String,
    /// Comma-separated extension list, possibly empty.
    pub extensions: String,
}

impl ProjectConfig {
    pub fn new(project_name: impl Into<String>, extensions: impl Into<String>) -> Self {
        Self { project_name: project_name.into(), extensions: extensions.into() }
    }
}

/// A validated project name, usable both as a directory name and a Maven artifact id.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII alphanumerics, `-`, `_`, or `.`
/// - Does not start with `.` or `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::MissingArgument("project name is required".into()));
        }
        let valid_chars =
            name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid_chars || name.starts_with('.') || name.starts_with('-') {
            return Err(AppError::InvalidProjectName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, de-duplicated list of Quarkus extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extensions(Vec<String>);

impl Extensions {
    /// Parse a comma-separated list. Blank entries are dropped.
    pub fn parse(raw: &str) -> Self {
        let mut items: Vec<String> = Vec::new();
        for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !items.iter().any(|existing| existing == item) {
                items.push(item.to_string());
            }
        }
        Self(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Render back to the comma-separated form the build tool expects.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}
