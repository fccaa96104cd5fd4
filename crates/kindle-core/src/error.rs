//! Error types for kindle-core

use thiserror::Error;

/// Result type alias using kindle-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for kindle
#[derive(Error, Debug)]
pub enum Error {
    /// No target directory was given on the command line
    #[error("no project directory provided")]
    MissingDirectory,

    /// Project name failed validation
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// License identifier is not one of the supported licenses
    #[error("Unknown license: {license}. Valid licenses: {available}")]
    UnknownLicense { license: String, available: String },

    /// Package manager is not one of the supported ones
    #[error("Unknown package manager: {name}. Valid package managers: npm, pnpm, yarn, bun")]
    UnknownPackageManager { name: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Path is not valid UTF-8
    #[error("Path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProjectName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown license error
    pub fn unknown_license(license: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownLicense {
            license: license.into(),
            available: available.into(),
        }
    }

    /// Create an unknown package manager error
    pub fn unknown_package_manager(name: impl Into<String>) -> Self {
        Self::UnknownPackageManager { name: name.into() }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a non-UTF-8 path error
    pub fn non_utf8_path(path: impl Into<String>) -> Self {
        Self::NonUtf8Path { path: path.into() }
    }
}
