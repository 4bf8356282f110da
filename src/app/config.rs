//! Plugin configuration loading.

use std::path::Path;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, PluginConfig};
use crate::ports::ProjectFilesystem;

/// Read `.kn-workflow.toml` from the filesystem root, falling back to defaults
/// when the file is absent. A present but invalid file is an error.
pub fn load_config(filesystem: &impl ProjectFilesystem) -> Result<PluginConfig, AppError> {
    let path = Path::new(CONFIG_FILE);
    if !filesystem.is_file(path) {
        return Ok(PluginConfig::default());
    }

    let content = filesystem.read_file(path)?;
    parse_config_content(&content)
}
