pub mod memory_filesystem;
pub mod os_filesystem;
pub mod process_command_runner;
pub mod project_template;

pub use memory_filesystem::MemoryFilesystem;
pub use os_filesystem::OsFilesystem;
pub use process_command_runner::ProcessCommandRunner;
