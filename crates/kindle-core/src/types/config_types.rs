//! Configuration types for ~/.kindle/config.yaml

use crate::types::PackageManager;
use serde::{Deserialize, Serialize};

/// Template repository cloned for every new project.
///
/// This is the project's own published template. Point `template.url`,
/// `KINDLE_TEMPLATE_URL` or `--template` at another repository (or a local
/// path) to scaffold from a different template.
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/kindle-dev/vite-react-ts-template.git";

/// Root kindle configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KindleConfig {
    /// Template source
    #[serde(default)]
    pub template: TemplateConfig,

    /// Package manager used to install dependencies
    #[serde(default)]
    pub package_manager: PackageManager,

    /// Git defaults for the freshly initialized repository
    #[serde(default)]
    pub git: GitConfig,
}

/// Where the template comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
    /// Repository URL or local path
    #[serde(default = "default_template_url")]
    pub url: String,

    /// Branch to clone (remote default branch when unset)
    #[serde(default)]
    pub branch: Option<String>,

    /// Shallow clone depth; history is discarded anyway
    #[serde(default = "default_clone_depth")]
    pub depth: Option<u32>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            url: default_template_url(),
            branch: None,
            depth: default_clone_depth(),
        }
    }
}

fn default_template_url() -> String {
    DEFAULT_TEMPLATE_URL.to_string()
}

fn default_clone_depth() -> Option<u32> {
    Some(1)
}

/// Git settings for `git init`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitConfig {
    /// Initial branch name; git's own default when unset
    #[serde(default)]
    pub default_branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = KindleConfig::default();
        assert_eq!(config.template.url, DEFAULT_TEMPLATE_URL);
        assert_eq!(config.template.depth, Some(1));
        assert!(config.template.branch.is_none());
        assert_eq!(config.package_manager, PackageManager::Npm);
        assert!(config.git.default_branch.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
package-manager: pnpm
git:
  default-branch: trunk
"#;
        let config: KindleConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.package_manager, PackageManager::Pnpm);
        assert_eq!(config.git.default_branch.as_deref(), Some("trunk"));
        assert_eq!(config.template.url, DEFAULT_TEMPLATE_URL);
    }

    #[test]
    fn test_serialization_is_kebab_case() {
        let yaml = serde_yaml_ng::to_string(&KindleConfig::default()).unwrap();
        assert!(yaml.contains("package-manager: npm"));
        assert!(yaml.contains("default-branch: null"));
    }
}
