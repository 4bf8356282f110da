//! Plugin configuration (`.kn-workflow.toml`).

use serde::Deserialize;

use super::AppError;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".kn-workflow.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    pub tools: ToolsConfig,
    pub quarkus: QuarkusConfig,
}

/// External executables invoked by the plugin.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub kubectl: String,
    pub maven: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { kubectl: "kubectl".to_string(), maven: "mvn".to_string() }
    }
}

/// Coordinates rendered into the generated `pom.xml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct QuarkusConfig {
    pub platform_group_id: String,
    pub platform_version: String,
    pub project_group_id: String,
    pub default_extensions: Vec<String>,
}

impl Default for QuarkusConfig {
    fn default() -> Self {
        Self {
            platform_group_id: "io.quarkus.platform".to_string(),
            platform_version: "2.16.7.Final".to_string(),
            project_group_id: "org.acme".to_string(),
            default_extensions: vec![
                "kogito-quarkus-serverless-workflow".to_string(),
                "kogito-addons-quarkus-knative-eventing".to_string(),
                "quarkus-kubernetes".to_string(),
                "quarkus-smallrye-health".to_string(),
            ],
        }
    }
}

impl PluginConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("tools.kubectl", &self.tools.kubectl),
            ("tools.maven", &self.tools.maven),
            ("quarkus.platform_group_id", &self.quarkus.platform_group_id),
            ("quarkus.platform_version", &self.quarkus.platform_version),
            ("quarkus.project_group_id", &self.quarkus.project_group_id),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "{} must be a non-empty string in {}",
                    key, CONFIG_FILE
                )));
            }
        }
        Ok(())
    }
}

/// Parse and validate plugin configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PluginConfig, AppError> {
    let config: PluginConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
