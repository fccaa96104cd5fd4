//! Configuration loader with precedence
//!
//! Loads configuration from the following sources (low to high):
//! 1. Built-in defaults
//! 2. Config file (`--config <path>`, or `~/.kindle/config.yaml` when present)
//! 3. Environment variables (`KINDLE_*` prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::KindleConfig;
use crate::utils::get_home_dir;
use camino::{Utf8Path, Utf8PathBuf};
use std::env;
use std::fs;
use tracing::debug;

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Overrides `template.url`
pub const ENV_TEMPLATE_URL: &str = "KINDLE_TEMPLATE_URL";

/// Overrides `template.branch`
pub const ENV_TEMPLATE_BRANCH: &str = "KINDLE_TEMPLATE_BRANCH";

/// Overrides `package-manager`
pub const ENV_PACKAGE_MANAGER: &str = "KINDLE_PACKAGE_MANAGER";

/// Configuration loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Directory searched for `config.yaml`; `None` when no home directory exists
    config_dir: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that looks in `~/.kindle`
    pub fn new() -> Self {
        let config_dir = get_home_dir().map(|home| home.join(".kindle"));
        Self { config_dir }
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir: Some(config_dir),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load(&self, explicit: Option<&Utf8Path>) -> Result<KindleConfig> {
        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                Self::load_yaml_file(path)?
            }
            None => match self.default_config_path() {
                Some(path) if path.exists() => Self::load_yaml_file(&path)?,
                _ => KindleConfig::default(),
            },
        };

        self.apply_env_overrides(config)
    }

    /// Path of the default config file
    pub fn default_config_path(&self) -> Option<Utf8PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Load a YAML file and parse it
    fn load_yaml_file(path: &Utf8Path) -> Result<KindleConfig> {
        debug!("Loading config from {}", path);
        let content = fs::read_to_string(path)?;

        if content.trim().is_empty() {
            return Ok(KindleConfig::default());
        }

        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: KindleConfig) -> Result<KindleConfig> {
        if let Ok(val) = env::var(ENV_TEMPLATE_URL) {
            if val.trim().is_empty() {
                return Err(Error::invalid_config(format!(
                    "{} must not be empty",
                    ENV_TEMPLATE_URL
                )));
            }
            config.template.url = val;
        }

        if let Ok(val) = env::var(ENV_TEMPLATE_BRANCH) {
            config.template.branch = Some(val).filter(|b| !b.trim().is_empty());
        }

        if let Ok(val) = env::var(ENV_PACKAGE_MANAGER) {
            config.package_manager = val.parse().map_err(|_| {
                Error::invalid_config(format!(
                    "{} must be one of npm, pnpm, yarn, bun (got '{}')",
                    ENV_PACKAGE_MANAGER, val
                ))
            })?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
