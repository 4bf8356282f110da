//! Write the starter workflow definition.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::{AppError, WorkflowDefinition, WorkflowFormat};
use crate::ports::ProjectFilesystem;

/// Write the default workflow definition at `path`.
///
/// Refuses to overwrite an existing file. A failed write never leaves an
/// empty or truncated file behind.
pub fn execute(filesystem: &impl ProjectFilesystem, path: &Path) -> Result<(), AppError> {
    let format = WorkflowFormat::from_path(path)?;
    if filesystem.exists(path) {
        return Err(AppError::FileExists(path.to_path_buf()));
    }

    let content = WorkflowDefinition::default().render(format)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        filesystem.create_dir_all(parent)?;
    }

    if let Err(err) = filesystem.create_file(path, &content) {
        if !matches!(err, AppError::FileExists(_))
            && let Err(cleanup) = filesystem.remove_file(path)
        {
            warn!(path = %path.display(), error = %cleanup, "failed to remove partial workflow file");
        }
        return Err(err);
    }

    info!(path = %path.display(), "workflow definition created");
    Ok(())
}
