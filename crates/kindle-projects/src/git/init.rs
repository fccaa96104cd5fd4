//! Repository initialization

use crate::error::{Error, Result};
use camino::Utf8Path;
use kindle_core::types::GitConfig;
use tokio::process::Command;
use tracing::{debug, info};

/// Options for initializing a git repository
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Initial branch name (e.g., "main"); git's default when unset
    pub default_branch: Option<String>,
}

impl From<&GitConfig> for InitOptions {
    fn from(config: &GitConfig) -> Self {
        Self {
            default_branch: config.default_branch.clone(),
        }
    }
}

/// Initialize a new git repository
///
/// # Arguments
/// * `path` - Directory to initialize as a git repository
/// * `options` - Initialization options
///
/// # Errors
/// Returns error if:
/// - Directory doesn't exist
/// - Git is not installed
/// - Git init fails
pub async fn init_repository(path: &Utf8Path, options: &InitOptions) -> Result<()> {
    info!("Initializing git repository at: {}", path);

    if !path.is_dir() {
        return Err(Error::invalid_path(path.as_str()));
    }

    if path.join(".git").exists() {
        debug!("Git repository already exists at: {}", path);
        return Ok(());
    }

    let mut cmd = Command::new("git");
    cmd.current_dir(path).arg("init").arg("--quiet");

    if let Some(branch) = &options.default_branch {
        cmd.arg("--initial-branch").arg(branch);
    }

    debug!("Running: git init");
    let output = cmd.output().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::GitNotFound
        } else {
            Error::process_execution(format!("git init: {}", e))
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "git init failed: {}",
            stderr.trim()
        )));
    }

    info!("Repository initialized successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::is_git_available;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_repository() {
        if !is_git_available() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap();

        init_repository(path, &InitOptions::default()).await.unwrap();

        assert!(path.join(".git").exists());
        // A fresh repository has no commits and no extra files
        assert!(!path.join(".gitignore").exists());
    }

    #[tokio::test]
    async fn test_init_repository_with_custom_branch() {
        if !is_git_available() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap();

        let options = InitOptions::from(&GitConfig {
            default_branch: Some("develop".to_string()),
        });
        let result = init_repository(path, &options).await;

        // --initial-branch needs git >= 2.28
        if result.is_ok() {
            let head = std::fs::read_to_string(path.join(".git/HEAD")).unwrap();
            assert!(head.contains("refs/heads/develop"));
        }
    }

    #[tokio::test]
    async fn test_init_existing_repository_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap();
        std::fs::create_dir(path.join(".git")).unwrap();

        init_repository(path, &InitOptions::default()).await.unwrap();
        assert!(std::fs::read_dir(path.join(".git")).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn test_init_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap().join("missing");

        let result = init_repository(&path, &InitOptions::default()).await;
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }
}
