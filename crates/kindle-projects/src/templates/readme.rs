//! README generation with Tera

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use kindle_core::types::{Answers, PackageManager};
use tera::{Context, Tera};
use tracing::info;

/// README file name inside the project directory
pub const README_FILE: &str = "README.md";

const README_TEMPLATE: &str = include_str!("../../templates/README.md.tera");

/// Render the README for a project
pub fn render_readme(answers: &Answers, package_manager: PackageManager) -> Result<String> {
    let mut context = Context::new();
    context.insert("name", answers.name());
    context.insert("description", answers.description());
    context.insert("license", answers.license().as_str());
    context.insert("package_manager", package_manager.command());
    context.insert("install_command", &package_manager.install_command());
    context.insert("dev_command", &package_manager.run_script("dev"));
    context.insert("build_command", &package_manager.run_script("build"));

    // Plain text output, nothing to escape
    Tera::one_off(README_TEMPLATE, &context, false)
        .map_err(|e| Error::readme_render(format!("{:?}", e)))
}

/// Write the README into `project_dir`, replacing any existing one
pub async fn write_readme(
    project_dir: &Utf8Path,
    answers: &Answers,
    package_manager: PackageManager,
) -> Result<Utf8PathBuf> {
    let path = project_dir.join(README_FILE);
    info!("Writing {}", path);

    let content = render_readme(answers, package_manager)?;
    tokio::fs::write(&path, content).await?;
    Ok(path)
}
