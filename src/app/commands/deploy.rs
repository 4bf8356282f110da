//! Deploy the Knative service and eventing bindings produced by the build.
//!
//! The marker file is the only trigger: when `kogito.yml` is present under the
//! deploy path, the service manifest is applied followed by the bindings.
//! Anything else is "nothing to deploy yet", which is not an error. This
//! command only reads the deploy path; it never writes to it.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, DeployConfig, DeployPath};
use crate::ports::{CommandRunner, ProjectFilesystem};

/// What a deploy invocation did.
///
/// [`execute`] only reads the filesystem before applying, so an
/// `Err(AppError::ToolFailed)` from it means an apply was attempted and failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// No marker under the path; no tool was invoked.
    NothingToDeploy { path: DeployPath },
    /// Both applies succeeded.
    Deployed { path: DeployPath, service_output: String, bindings_output: String },
}

impl DeployOutcome {
    /// Whether an apply was attempted.
    pub fn triggered(&self) -> bool {
        matches!(self, DeployOutcome::Deployed { .. })
    }

    pub fn path(&self) -> &DeployPath {
        match self {
            DeployOutcome::NothingToDeploy { path } | DeployOutcome::Deployed { path, .. } => path,
        }
    }
}

pub fn execute<F, C>(ctx: &AppContext<F, C>, config: &DeployConfig) -> Result<DeployOutcome, AppError>
where
    F: ProjectFilesystem,
    C: CommandRunner,
{
    let path = DeployPath::resolve(&config.path);
    let marker = path.marker();

    if !ctx.filesystem().is_file(&marker) {
        info!(path = %path.as_str(), "no deployable manifests found");
        return Ok(DeployOutcome::NothingToDeploy { path });
    }

    let kubectl = &ctx.config().tools.kubectl;

    let service_manifest = path.service_manifest().to_string_lossy().to_string();
    let service_output = ctx.runner().run(kubectl, &["apply", "-f", &service_manifest])?;
    debug!(output = %service_output, "knative service applied");

    let bindings_manifest = marker.to_string_lossy().to_string();
    let bindings_output = ctx.runner().run(kubectl, &["apply", "-f", &bindings_manifest])?;
    debug!(output = %bindings_output, "knative eventing bindings applied");

    Ok(DeployOutcome::Deployed { path, service_output, bindings_output })
}
