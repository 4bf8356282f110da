//! In-memory `ProjectFilesystem` for tests and dry runs.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::AppError;
use crate::ports::{EntryKind, ProjectFilesystem};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(String),
}

#[derive(Debug, Default)]
struct MemoryState {
    nodes: BTreeMap<PathBuf, Node>,
    failing_writes: BTreeSet<PathBuf>,
}

/// In-memory filesystem tree.
///
/// Clones share the same tree, so a test can keep a handle for assertions while
/// the command under test owns another. `./a/b` and `a/b` name the same entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        {
            let mut state = self.state();
            insert_ancestors(&mut state.nodes, &normalize(path));
            state.nodes.insert(normalize(path), Node::File(content.to_string()));
        }
        self
    }

    /// Seed an empty directory tree.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        {
            let mut state = self.state();
            let path = normalize(path.as_ref());
            insert_ancestors(&mut state.nodes, &path);
            state.nodes.insert(path, Node::Dir);
        }
        self
    }

    /// Make writes to `path` fail after leaving an empty file behind,
    /// the way an interrupted write does on disk.
    pub fn fail_writes_to(self, path: impl AsRef<Path>) -> Self {
        self.state().failing_writes.insert(normalize(path.as_ref()));
        self
    }

    /// All file paths currently stored, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.state()
            .nodes
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// True when nothing at all has been stored.
    pub fn is_empty(&self) -> bool {
        self.state().nodes.is_empty()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn insert_ancestors(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) {
    for ancestor in path.ancestors().skip(1) {
        if is_root(ancestor) {
            continue;
        }
        nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
    }
}

fn is_root(path: &Path) -> bool {
    path.as_os_str().is_empty() || path.parent().is_none()
}

fn io_error(kind: io::ErrorKind, message: &str) -> io::Error {
    io::Error::new(kind, message.to_string())
}

impl MemoryState {
    fn parent_is_dir(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(parent) if is_root(parent) => true,
            Some(parent) => matches!(self.nodes.get(parent), Some(Node::Dir)),
        }
    }

    fn write(&mut self, original: &Path, path: PathBuf, content: &str) -> Result<(), AppError> {
        if matches!(self.nodes.get(&path), Some(Node::Dir)) {
            return Err(AppError::filesystem(
                original,
                io_error(io::ErrorKind::Other, "is a directory"),
            ));
        }
        if self.failing_writes.contains(&path) {
            self.nodes.insert(path, Node::File(String::new()));
            return Err(AppError::filesystem(
                original,
                io_error(io::ErrorKind::Other, "write interrupted"),
            ));
        }
        self.nodes.insert(path, Node::File(content.to_string()));
        Ok(())
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn create_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut state = self.state();
        let key = normalize(path);
        if state.nodes.contains_key(&key) {
            return Err(AppError::FileExists(path.to_path_buf()));
        }
        if !state.parent_is_dir(&key) {
            return Err(AppError::filesystem(
                path,
                io_error(io::ErrorKind::NotFound, "parent directory does not exist"),
            ));
        }
        state.write(path, key, content)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        match self.state().nodes.get(&normalize(path)) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Dir) => Err(AppError::filesystem(
                path,
                io_error(io::ErrorKind::Other, "is a directory"),
            )),
            None => Err(AppError::NotFound(path.to_path_buf())),
        }
    }

    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state();
        let key = normalize(path);
        if state.nodes.contains_key(&key) {
            return Err(AppError::filesystem(
                path,
                io_error(io::ErrorKind::AlreadyExists, "path already exists"),
            ));
        }
        if !state.parent_is_dir(&key) {
            return Err(AppError::filesystem(
                path,
                io_error(io::ErrorKind::NotFound, "parent directory does not exist"),
            ));
        }
        state.nodes.insert(key, Node::Dir);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state();
        let key = normalize(path);
        let mut ancestors: Vec<&Path> = key.ancestors().filter(|p| !is_root(p)).collect();
        ancestors.reverse();
        for ancestor in ancestors {
            match state.nodes.get(ancestor) {
                Some(Node::Dir) => {}
                Some(Node::File(_)) => {
                    return Err(AppError::filesystem(
                        path,
                        io_error(io::ErrorKind::AlreadyExists, "a file is in the way"),
                    ));
                }
                None => {
                    state.nodes.insert(ancestor.to_path_buf(), Node::Dir);
                }
            }
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state();
        let key = normalize(path);
        match state.nodes.get(&key) {
            Some(Node::Dir) => Err(AppError::filesystem(
                path,
                io_error(io::ErrorKind::Other, "is a directory"),
            )),
            Some(Node::File(_)) => {
                state.nodes.remove(&key);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let key = normalize(path);
        self.state().nodes.retain(|entry, _| !entry.starts_with(&key));
        Ok(())
    }

    fn stat(&self, path: &Path) -> Option<EntryKind> {
        let key = normalize(path);
        if is_root(&key) {
            return Some(EntryKind::Dir);
        }
        self.state().nodes.get(&key).map(|node| match node {
            Node::Dir => EntryKind::Dir,
            Node::File(_) => EntryKind::File,
        })
    }
}
