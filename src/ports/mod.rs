mod command_runner;
mod filesystem;

pub use command_runner::{CommandRunner, command_line};
pub use filesystem::{EntryKind, ProjectFilesystem};
