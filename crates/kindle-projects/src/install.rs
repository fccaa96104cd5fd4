//! Dependency installation with the project's package manager

use crate::error::{Error, Result};
use camino::Utf8Path;
use kindle_core::types::PackageManager;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Run `<package manager> install` in `project_dir`.
///
/// Output is streamed straight to the user's terminal. A missing package
/// manager surfaces as a process execution error.
pub async fn install_dependencies(
    project_dir: &Utf8Path,
    package_manager: PackageManager,
) -> Result<()> {
    info!(
        "Installing dependencies with {} in {}",
        package_manager, project_dir
    );

    // Resolve through PATH so wrappers like npm.cmd are found on Windows
    let program = which::which(package_manager.command())
        .unwrap_or_else(|_| PathBuf::from(package_manager.command()));

    run_streaming(
        &program,
        &["install"],
        project_dir,
        &package_manager.install_command(),
    )
    .await?;

    info!("Dependencies installed successfully");
    Ok(())
}

/// Run a command with inherited stdio, failing on non-zero exit
async fn run_streaming(
    program: &std::path::Path,
    args: &[&str],
    dir: &Utf8Path,
    command_line: &str,
) -> Result<()> {
    debug!("Running: {} (in {})", command_line, dir);

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| Error::process_execution(format!("{}: {}", command_line, e)))?;

    if !status.success() {
        return Err(Error::install_failed(command_line, status.to_string()));
    }

    Ok(())
}
