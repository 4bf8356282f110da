//! Scaffold a new workflow project.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::adapters::project_template::{ScaffoldFile, render_project_files, required_dirs};
use crate::app::AppContext;
use crate::app::commands::create_workflow;
use crate::domain::{
    AppError, Extensions, PROJECT_WORKFLOW_DIR, ProjectConfig, ProjectName, WORKFLOW_FILE_NAME,
};
use crate::ports::{CommandRunner, ProjectFilesystem};

/// Result of a successful `create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub project_dir: PathBuf,
    pub workflow_path: PathBuf,
    /// User extensions added through the build tool.
    pub extensions: Vec<String>,
}

pub fn execute<F, C>(ctx: &AppContext<F, C>, config: &ProjectConfig) -> Result<CreateOutcome, AppError>
where
    F: ProjectFilesystem,
    C: CommandRunner,
{
    let name = ProjectName::new(&config.project_name)?;
    let extensions = Extensions::parse(&config.extensions);
    let fs = ctx.filesystem();

    let project_dir = PathBuf::from(name.as_str());
    if fs.exists(&project_dir) {
        return Err(AppError::ProjectExists(name.to_string()));
    }

    let files = render_project_files(&name, &ctx.config().quarkus)?;

    fs.create_dir(&project_dir).map_err(|err| match err.kind() {
        std::io::ErrorKind::AlreadyExists => AppError::ProjectExists(name.to_string()),
        _ => err,
    })?;

    let workflow_path = project_dir.join(PROJECT_WORKFLOW_DIR).join(WORKFLOW_FILE_NAME);
    if let Err(err) = scaffold(fs, &project_dir, &files, &workflow_path) {
        if let Err(cleanup) = fs.remove_dir_all(&project_dir) {
            warn!(project = %name, error = %cleanup, "failed to clean up partial project");
        }
        return Err(err);
    }
    info!(project = %name, files = files.len() + 1, "project scaffold written");

    if !extensions.is_empty() {
        add_extensions(ctx, &project_dir, &extensions)?;
    }

    Ok(CreateOutcome { project_dir, workflow_path, extensions: extensions.as_slice().to_vec() })
}

fn scaffold<F: ProjectFilesystem>(
    fs: &F,
    project_dir: &Path,
    files: &[ScaffoldFile],
    workflow_path: &Path,
) -> Result<(), AppError> {
    for dir in required_dirs(files) {
        fs.create_dir_all(&project_dir.join(dir))?;
    }
    for file in files {
        fs.create_file(&project_dir.join(&file.path), &file.content)?;
    }
    create_workflow::execute(fs, workflow_path)
}

fn add_extensions<F, C>(
    ctx: &AppContext<F, C>,
    project_dir: &Path,
    extensions: &Extensions,
) -> Result<(), AppError>
where
    F: ProjectFilesystem,
    C: CommandRunner,
{
    let pom = project_dir.join("pom.xml").to_string_lossy().to_string();
    let extensions_arg = format!("-Dextensions={}", extensions.joined());
    let output = ctx.runner().run(
        &ctx.config().tools.maven,
        &["-f", &pom, "quarkus:add-extension", &extensions_arg],
    )?;
    debug!(output = %output, "extensions added");
    Ok(())
}
