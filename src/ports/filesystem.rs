//! Filesystem operations used by `create` and `deploy`.
//!
//! Every path check and write performed by the commands goes through this port,
//! so the same command code runs against the real disk or an in-memory tree.

use std::path::Path;

use crate::domain::AppError;

/// Kind of an existing filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// Port for project-level filesystem operations.
///
/// Relative paths are resolved against the implementation's base directory.
/// Errors carry the offending path.
pub trait ProjectFilesystem {
    /// Create a new file with the given content.
    ///
    /// Fails with `AppError::FileExists` if the path is already taken. The parent
    /// directory must exist.
    fn create_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Create a single directory. Fails if the path already exists.
    fn create_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Remove a file. No-op if the file does not exist.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// Remove a directory and everything below it. No-op if absent.
    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Inspect a path without touching it.
    fn stat(&self, path: &Path) -> Option<EntryKind>;

    fn exists(&self, path: &Path) -> bool {
        self.stat(path).is_some()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.stat(path) == Some(EntryKind::File)
    }
}
