//! Create command implementations.

use std::path::Path;

use crate::domain::{AppError, ProjectConfig};

pub fn run_create(name: String, extension: String) -> Result<(), AppError> {
    let outcome = crate::app::api::create_project(ProjectConfig::new(name, extension))?;

    println!("✅ Created project at {}/", outcome.project_dir.display());
    println!("✅ Workflow definition: {}", outcome.workflow_path.display());
    if !outcome.extensions.is_empty() {
        println!("✅ Added extensions: {}", outcome.extensions.join(", "));
    }
    Ok(())
}

pub fn run_create_workflow(path: &Path) -> Result<(), AppError> {
    crate::app::api::create_workflow(path)?;
    println!("✅ Created workflow definition at {}", path.display());
    Ok(())
}
