use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for kn-workflow operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure not tied to a specific path.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Filesystem operation failed on a specific path.
    #[error("Filesystem error at '{}': {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Required input was not provided.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// Project name cannot be used as a directory name or artifact id.
    #[error(
        "Invalid project name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidProjectName(String),

    /// Project directory already exists.
    #[error("Project directory '{0}' already exists")]
    ProjectExists(String),

    /// File already exists and overwriting is not allowed.
    #[error("File '{}' already exists", .0.display())]
    FileExists(PathBuf),

    /// Path does not exist.
    #[error("Path '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Workflow definition path has an unknown extension.
    #[error("Unsupported workflow file '{}': expected a .json, .yaml, or .yml extension", .0.display())]
    UnsupportedWorkflowFormat(PathBuf),

    /// External tool failed to spawn or exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    ToolFailed { command: String, details: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    Template { template: String, reason: String },

    /// Serialization of generated content failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Wrap an `io::Error` with the path it happened on.
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Filesystem { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Filesystem { source, .. } => source.kind(),
            AppError::MissingArgument(_)
            | AppError::InvalidProjectName(_)
            | AppError::UnsupportedWorkflowFormat(_)
            | AppError::Configuration(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::ProjectExists(_) | AppError::FileExists(_) => io::ErrorKind::AlreadyExists,
            AppError::NotFound(_) => io::ErrorKind::NotFound,
            AppError::Template { .. } | AppError::Serialization(_) => io::ErrorKind::InvalidData,
            AppError::ToolFailed { .. } => io::ErrorKind::Other,
        }
    }
}
