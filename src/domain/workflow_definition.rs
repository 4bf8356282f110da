//! Starter serverless workflow definition written by `create` and `create-workflow`.

use std::path::Path;

use serde::Serialize;
use serde_json::{Value, json};

use super::AppError;

/// File name of the workflow scaffolded into new projects.
pub const WORKFLOW_FILE_NAME: &str = "workflow.sw.json";

/// Location of the workflow inside a generated project.
pub const PROJECT_WORKFLOW_DIR: &str = "src/main/resources";

/// On-disk encoding of a workflow definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowFormat {
    Json,
    Yaml,
}

impl WorkflowFormat {
    /// Pick the encoding from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(WorkflowFormat::Json),
            Some("yaml") | Some("yml") => Ok(WorkflowFormat::Yaml),
            _ => Err(AppError::UnsupportedWorkflowFormat(path.to_path_buf())),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub id: String,
    pub version: String,
    pub spec_version: String,
    pub name: String,
    pub description: String,
    pub start: String,
    pub states: Vec<WorkflowState>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowState {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Value,
    pub end: bool,
}

impl Default for WorkflowDefinition {
    fn default() -> Self {
        Self {
            id: "hello".to_string(),
            version: "1.0".to_string(),
            spec_version: "0.8".to_string(),
            name: "Hello World".to_string(),
            description: "Inject Hello World".to_string(),
            start: "Hello".to_string(),
            states: vec![WorkflowState {
                name: "Hello".to_string(),
                kind: "inject".to_string(),
                data: json!({ "message": "Hello World" }),
                end: true,
            }],
        }
    }
}

impl WorkflowDefinition {
    pub fn render(&self, format: WorkflowFormat) -> Result<String, AppError> {
        let mut rendered = match format {
            WorkflowFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| AppError::Serialization(e.to_string()))?,
            WorkflowFormat::Yaml => {
                serde_yaml::to_string(self).map_err(|e| AppError::Serialization(e.to_string()))?
            }
        };
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            WorkflowFormat::from_path(Path::new("a/workflow.sw.json")).unwrap(),
            WorkflowFormat::Json
        );
        assert_eq!(
            WorkflowFormat::from_path(Path::new("workflow.sw.yaml")).unwrap(),
            WorkflowFormat::Yaml
        );
        assert_eq!(
            WorkflowFormat::from_path(Path::new("workflow.sw.yml")).unwrap(),
            WorkflowFormat::Yaml
        );
        assert!(matches!(
            WorkflowFormat::from_path(Path::new("workflow.txt")),
            Err(AppError::UnsupportedWorkflowFormat(_))
        ));
        assert!(WorkflowFormat::from_path(Path::new("workflow")).is_err());
    }

    #[test]
    fn json_rendering_uses_spec_field_names() {
        let rendered = WorkflowDefinition::default().render(WorkflowFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["specVersion"], "0.8");
        assert_eq!(value["start"], "Hello");
        assert_eq!(value["states"][0]["type"], "inject");
        assert_eq!(value["states"][0]["data"]["message"], "Hello World");
        assert_eq!(value["states"][0]["end"], true);
    }

    #[test]
    fn yaml_rendering_parses_back() {
        let rendered = WorkflowDefinition::default().render(WorkflowFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();

        assert_eq!(value["id"].as_str(), Some("hello"));
        assert_eq!(value["states"][0]["name"].as_str(), Some("Hello"));
    }
}
