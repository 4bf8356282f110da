//! kn-workflow: scaffold serverless workflow projects and deploy them as
//! Knative services with eventing bindings.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    CreateOutcome, DeployOutcome, create_project, create_project_at, create_workflow,
    create_workflow_at, deploy_service_and_bindings, deploy_service_and_bindings_at,
};
pub use domain::{AppError, DeployConfig, DeployPath, PluginConfig, ProjectConfig};
