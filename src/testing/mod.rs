pub mod fake_command_runner;

pub use fake_command_runner::FakeCommandRunner;

use crate::adapters::MemoryFilesystem;
use crate::app::AppContext;
use crate::domain::PluginConfig;

/// Context wired to an in-memory tree and a scripted runner with default config.
pub fn test_context(
    filesystem: MemoryFilesystem,
    runner: FakeCommandRunner,
) -> AppContext<MemoryFilesystem, FakeCommandRunner> {
    AppContext::new(filesystem, runner, PluginConfig::default())
}
