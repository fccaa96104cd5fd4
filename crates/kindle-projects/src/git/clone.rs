//! Repository cloning

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

/// Options for cloning a repository
#[derive(Debug, Clone, Default)]
pub struct CloneOptions {
    /// Shallow clone with specified depth
    pub depth: Option<u32>,
    /// Branch to checkout after clone
    pub branch: Option<String>,
}

/// Clone a repository
///
/// # Arguments
/// * `source` - Repository URL or path to a local repository
/// * `destination` - Destination directory path, must not exist
/// * `options` - Clone options
///
/// # Returns
/// Path to the cloned repository
///
/// # Errors
/// Returns error if:
/// - Invalid repository source
/// - Destination already exists
/// - Clone operation fails
pub async fn clone_repository(
    source: &str,
    destination: &Utf8Path,
    options: &CloneOptions,
) -> Result<Utf8PathBuf> {
    info!("Cloning repository: {} -> {}", source, destination);

    if !is_valid_repo_source(source) {
        return Err(Error::invalid_repo_url(source));
    }

    if destination.exists() {
        return Err(Error::directory_exists(destination.as_str()));
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let mut cmd = Command::new("git");
    cmd.arg("clone").arg("--quiet");

    if let Some(depth) = options.depth {
        cmd.arg("--depth").arg(depth.to_string());
    }

    if let Some(branch) = &options.branch {
        cmd.arg("--branch").arg(branch);
    }

    cmd.arg("--").arg(source).arg(destination.as_str());

    debug!("Running: git clone");
    let output = cmd.output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::GitNotFound
        } else {
            Error::process_execution(format!("git clone: {}", e))
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::clone_failed(stderr.trim()));
    }

    info!("Repository cloned successfully");
    Ok(destination.to_path_buf())
}

/// Validate a clone source: a remote URL or an existing local repository
fn is_valid_repo_source(source: &str) -> bool {
    const SCHEMES: &[&str] = &["https://", "http://", "ssh://", "git://", "file://", "git@"];

    if SCHEMES.iter().any(|scheme| source.starts_with(scheme)) {
        return true;
    }

    Utf8Path::new(source).is_dir()
}
