//! Error types for kindle-projects

use thiserror::Error;

/// Result type alias using kindle-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target directory already exists
    #[error("Directory already exists: {path}")]
    DirectoryExists { path: String },

    /// Current directory holds files other than .git / node_modules
    #[error("Directory is not empty: {path} (found: {entries})")]
    DirectoryNotEmpty { path: String, entries: String },

    /// Git command not found
    #[error("Git is not installed or not in PATH. Please install git: https://git-scm.com/downloads")]
    GitNotFound,

    /// Invalid repository URL
    #[error("Invalid repository URL: {url}")]
    InvalidRepoUrl { url: String },

    /// Clone failed
    #[error("Failed to clone template repository: {message}")]
    CloneFailed { message: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Manifest missing from the template
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: String },

    /// Manifest could not be parsed
    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// README template failed to render
    #[error("README rendering failed: {message}")]
    ReadmeRender { message: String },

    /// Package manager exited unsuccessfully
    #[error("`{command}` failed with {status}")]
    InstallFailed { command: String, status: String },

    /// Process execution error
    #[error("Process execution failed: {0}")]
    ProcessExecution(String),

    /// Invalid path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] kindle_core::Error),
}

impl Error {
    /// Create a directory exists error
    pub fn directory_exists(path: impl Into<String>) -> Self {
        Self::DirectoryExists { path: path.into() }
    }

    /// Create a directory not empty error
    pub fn directory_not_empty(path: impl Into<String>, entries: &[String]) -> Self {
        Self::DirectoryNotEmpty {
            path: path.into(),
            entries: entries.join(", "),
        }
    }

    /// Create an invalid repo URL error
    pub fn invalid_repo_url(url: impl Into<String>) -> Self {
        Self::InvalidRepoUrl { url: url.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a manifest not found error
    pub fn manifest_not_found(path: impl Into<String>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a README render error
    pub fn readme_render(message: impl Into<String>) -> Self {
        Self::ReadmeRender {
            message: message.into(),
        }
    }

    /// Create an install failed error
    pub fn install_failed(command: impl Into<String>, status: impl Into<String>) -> Self {
        Self::InstallFailed {
            command: command.into(),
            status: status.into(),
        }
    }

    /// Create a process execution error
    pub fn process_execution(message: impl Into<String>) -> Self {
        Self::ProcessExecution(message.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
