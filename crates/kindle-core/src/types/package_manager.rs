//! Package managers the generated project can be installed with

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Package manager used for `install` and referenced in the README
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Get all supported package managers
    pub fn all() -> Vec<Self> {
        vec![Self::Npm, Self::Pnpm, Self::Yarn, Self::Bun]
    }

    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Command line that runs a package.json script, e.g. `npm run dev`
    pub fn run_script(&self, script: &str) -> String {
        format!("{} run {}", self.command(), script)
    }

    /// Command line that installs dependencies
    pub fn install_command(&self) -> String {
        format!("{} install", self.command())
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

impl std::str::FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|pm| pm.command() == wanted)
            .ok_or_else(|| Error::unknown_package_manager(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(PackageManager::default(), PackageManager::Npm);
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
        assert_eq!(PackageManager::Yarn.run_script("dev"), "yarn run dev");
    }

    #[test]
    fn test_parse() {
        assert_eq!("bun".parse::<PackageManager>().unwrap(), PackageManager::Bun);
        assert_eq!("NPM".parse::<PackageManager>().unwrap(), PackageManager::Npm);
        assert!("cargo".parse::<PackageManager>().is_err());
    }
}
