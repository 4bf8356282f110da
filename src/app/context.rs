use crate::domain::PluginConfig;
use crate::ports::{CommandRunner, ProjectFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, C: CommandRunner> {
    filesystem: F,
    runner: C,
    config: PluginConfig,
}

impl<F: ProjectFilesystem, C: CommandRunner> AppContext<F, C> {
    /// Create a new application context.
    pub fn new(filesystem: F, runner: C, config: PluginConfig) -> Self {
        Self { filesystem, runner, config }
    }

    /// Get a reference to the filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the external command runner.
    pub fn runner(&self) -> &C {
        &self.runner
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }
}
