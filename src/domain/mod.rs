pub mod config;
pub mod deploy_path;
pub mod error;
pub mod project;
pub mod workflow_definition;

pub use config::{CONFIG_FILE, PluginConfig, QuarkusConfig, ToolsConfig};
pub use deploy_path::{
    DEFAULT_DEPLOY_PATH, DeployConfig, DeployPath, MARKER_FILE, SERVICE_MANIFEST,
};
pub use error::AppError;
pub use project::{DEFAULT_PROJECT_NAME, Extensions, ProjectConfig, ProjectName};
pub use workflow_definition::{
    PROJECT_WORKFLOW_DIR, WORKFLOW_FILE_NAME, WorkflowDefinition, WorkflowFormat,
};
