//! API Facade for the application.
//!
//! This module exposes high-level functions that bind the real filesystem and
//! process runner to the commands.

use std::path::{Path, PathBuf};

use crate::adapters::{OsFilesystem, ProcessCommandRunner};
use crate::app::config::load_config;
use crate::app::{
    AppContext,
    commands::{create, create_workflow, deploy},
};

pub use crate::app::commands::create::CreateOutcome;
pub use crate::app::commands::deploy::DeployOutcome;
pub use crate::domain::{AppError, DeployConfig, ProjectConfig};

/// Create an `AppContext` rooted at `root`, reading `.kn-workflow.toml` if present.
fn create_context(root: PathBuf) -> Result<AppContext<OsFilesystem, ProcessCommandRunner>, AppError> {
    let filesystem = OsFilesystem::new(root.clone());
    let config = load_config(&filesystem)?;
    Ok(AppContext::new(filesystem, ProcessCommandRunner::in_dir(root), config))
}

// =============================================================================
// Create Command API
// =============================================================================

/// Scaffold a new workflow project in the current directory.
pub fn create_project(config: ProjectConfig) -> Result<CreateOutcome, AppError> {
    create_project_at(std::env::current_dir()?, config)
}

/// Scaffold a new workflow project under `root`.
pub fn create_project_at(
    root: impl Into<PathBuf>,
    config: ProjectConfig,
) -> Result<CreateOutcome, AppError> {
    let ctx = create_context(root.into())?;
    create::execute(&ctx, &config)
}

/// Write the default workflow definition at `path`, relative to the current directory.
pub fn create_workflow(path: &Path) -> Result<(), AppError> {
    create_workflow_at(std::env::current_dir()?, path)
}

/// Write the default workflow definition at `path`, relative to `root`.
pub fn create_workflow_at(root: impl Into<PathBuf>, path: &Path) -> Result<(), AppError> {
    let filesystem = OsFilesystem::new(root);
    create_workflow::execute(&filesystem, path)
}

// =============================================================================
// Deploy Command API
// =============================================================================

/// Deploy the Knative service and eventing bindings found under the configured path.
///
/// Only `Err(AppError::ToolFailed)` means an apply was attempted. Config and
/// working directory errors are returned before anything runs.
pub fn deploy_service_and_bindings(config: DeployConfig) -> Result<DeployOutcome, AppError> {
    deploy_service_and_bindings_at(std::env::current_dir()?, config)
}

/// Same as [`deploy_service_and_bindings`], with paths resolved against `root`.
pub fn deploy_service_and_bindings_at(
    root: impl Into<PathBuf>,
    config: DeployConfig,
) -> Result<DeployOutcome, AppError> {
    let ctx = create_context(root.into())?;
    deploy::execute(&ctx, &config)
}
