//! `ProjectFilesystem` implementation backed by the real filesystem.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{EntryKind, ProjectFilesystem};

/// Filesystem rooted at a base directory. Relative paths resolve against `root`.
#[derive(Debug, Clone)]
pub struct OsFilesystem {
    root: PathBuf,
}

impl OsFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}

impl ProjectFilesystem for OsFilesystem {
    fn create_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path);
        let mut file =
            OpenOptions::new().write(true).create_new(true).open(&full_path).map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    AppError::FileExists(path.to_path_buf())
                } else {
                    AppError::filesystem(path, e)
                }
            })?;
        file.write_all(content.as_bytes()).map_err(|e| AppError::filesystem(path, e))?;
        file.flush().map_err(|e| AppError::filesystem(path, e))
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(self.resolve(path)).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::NotFound(path.to_path_buf())
            } else {
                AppError::filesystem(path, e)
            }
        })
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir(self.resolve(path)).map_err(|e| AppError::filesystem(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve(path)).map_err(|e| AppError::filesystem(path, e))
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        match fs::remove_file(self.resolve(path)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::filesystem(path, e)),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        match fs::remove_dir_all(self.resolve(path)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::filesystem(path, e)),
        }
    }

    fn stat(&self, path: &Path) -> Option<EntryKind> {
        let metadata = fs::metadata(self.resolve(path)).ok()?;
        if metadata.is_dir() { Some(EntryKind::Dir) } else { Some(EntryKind::File) }
    }
}
