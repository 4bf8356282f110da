//! Deploy command implementation.

use crate::app::commands::deploy::DeployOutcome;
use crate::domain::{AppError, DeployConfig, MARKER_FILE};

pub fn run_deploy(path: String) -> Result<(), AppError> {
    let outcome = crate::app::api::deploy_service_and_bindings(DeployConfig::new(path))?;

    match &outcome {
        DeployOutcome::Deployed { path, .. } => {
            println!("✅ Knative service successfully created");
            println!("✅ Knative Eventing bindings successfully created from {}", path.as_str());
        }
        DeployOutcome::NothingToDeploy { path } => {
            println!(
                "No {} found in {}. Build the project first; nothing was deployed.",
                MARKER_FILE,
                path.as_str()
            );
        }
    }
    Ok(())
}
