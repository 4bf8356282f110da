//! Deploy target resolution.

use std::path::{Component, Path, PathBuf};

/// Directory the build writes Kubernetes manifests to.
pub const DEFAULT_DEPLOY_PATH: &str = "./target/kubernetes";

/// Marker whose presence means the build produced deployable eventing resources.
pub const MARKER_FILE: &str = "kogito.yml";

/// Knative service manifest applied before the bindings.
pub const SERVICE_MANIFEST: &str = "knative.yml";

/// Raw input for the `deploy` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployConfig {
    /// Manifest directory; empty selects [`DEFAULT_DEPLOY_PATH`].
    pub path: String,
}

impl DeployConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Resolved manifest directory for one deploy invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPath(String);

impl DeployPath {
    /// Substitute the default for an empty path; otherwise keep the input as given.
    pub fn resolve(raw: &str) -> Self {
        if raw.is_empty() { Self(DEFAULT_DEPLOY_PATH.to_string()) } else { Self(raw.to_string()) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn marker(&self) -> PathBuf {
        self.as_path().join(MARKER_FILE)
    }

    pub fn service_manifest(&self) -> PathBuf {
        self.as_path().join(SERVICE_MANIFEST)
    }

    /// First real component of the path, i.e. the directory to remove when
    /// tearing down the whole tree. `./a/b` and `a/b` both yield `a`.
    pub fn cleanup_root(&self) -> Option<PathBuf> {
        self.as_path().components().find_map(|component| match component {
            Component::Normal(name) => Some(PathBuf::from(name)),
            _ => None,
        })
    }
}
