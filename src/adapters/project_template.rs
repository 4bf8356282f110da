//! Embedded project template rendered by `create`.

use std::path::{Path, PathBuf};

use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{Environment, UndefinedBehavior, Value, context};

use crate::domain::{AppError, ProjectName, QuarkusConfig};

static PROJECT_TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/project");

/// A rendered file, relative to the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: PathBuf,
    pub content: String,
}

/// Render every template file for a new project.
///
/// Files ending in `.j2` are rendered and lose the suffix; others are copied as-is.
pub fn render_project_files(
    name: &ProjectName,
    quarkus: &QuarkusConfig,
) -> Result<Vec<ScaffoldFile>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let ctx = context! {
        project_name => name.as_str(),
        group_id => &quarkus.project_group_id,
        platform_group_id => &quarkus.platform_group_id,
        platform_version => &quarkus.platform_version,
        extensions => &quarkus.default_extensions,
    };

    let mut files = Vec::new();
    collect_and_render(&PROJECT_TEMPLATE_DIR, &mut files, &env, &ctx)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    if files.is_empty() {
        return Err(AppError::Template {
            template: "project".to_string(),
            reason: "embedded project template is empty".to_string(),
        });
    }
    Ok(files)
}

fn collect_and_render(
    dir: &Dir,
    files: &mut Vec<ScaffoldFile>,
    env: &Environment,
    ctx: &Value,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_and_render(subdir, files, env, ctx)?,
            DirEntry::File(file) => {
                let template_name = file.path().to_string_lossy().to_string();
                let content = file.contents_utf8().ok_or_else(|| AppError::Template {
                    template: template_name.clone(),
                    reason: "not valid UTF-8".to_string(),
                })?;

                let (path, content) = match template_name.strip_suffix(".j2") {
                    Some(stripped) => {
                        let rendered = env.render_str(content, ctx).map_err(|e| {
                            AppError::Template {
                                template: template_name.clone(),
                                reason: e.to_string(),
                            }
                        })?;
                        (PathBuf::from(stripped), ensure_trailing_newline(rendered))
                    }
                    None => (file.path().to_path_buf(), content.to_string()),
                };
                files.push(ScaffoldFile { path, content });
            }
        }
    }
    Ok(())
}

fn ensure_trailing_newline(mut content: String) -> String {
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}

/// Directories that must exist before `files` can be created, parents first.
pub fn required_dirs(files: &[ScaffoldFile]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for file in files {
        let mut ancestors: Vec<&Path> = file
            .path
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        ancestors.reverse();
        for dir in ancestors {
            if !dirs.iter().any(|known| known == dir) {
                dirs.push(dir.to_path_buf());
            }
        }
    }
    dirs
}
