//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;
use kindle_core::types::{KindleConfig, License, PackageManager};

/// Usage examples printed with `--help` and when the directory is missing
pub const USAGE_EXAMPLES: &str = "Examples:
  kindle my-app    Create the project in ./my-app
  kindle .         Create the project in the current directory";

/// kindle - scaffold a TypeScript + React + Vite project
#[derive(Parser, Debug)]
#[command(name = "kindle")]
#[command(author, version, about, long_about = None)]
#[command(after_help = USAGE_EXAMPLES)]
pub struct Cli {
    /// Project directory (use `.` for the current directory)
    pub directory: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a kindle config file (default: ~/.kindle/config.yaml)
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,

    /// Template repository to clone (URL or local path)
    ///
    /// Overrides KINDLE_TEMPLATE_URL and `template.url` from the config file.
    /// Without any of them the built-in kindle template is cloned.
    #[arg(long, value_name = "URL")]
    pub template: Option<String>,

    /// Template branch to clone
    #[arg(long)]
    pub branch: Option<String>,

    /// Package manager used to install dependencies
    #[arg(long, value_name = "PM", value_parser = parse_package_manager)]
    pub package_manager: Option<PackageManager>,

    /// Project name (skips the prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Project description (skips the prompt)
    #[arg(long)]
    pub description: Option<String>,

    /// Project license (skips the prompt)
    #[arg(long, value_parser = parse_license)]
    pub license: Option<License>,

    /// Do not install dependencies
    #[arg(long)]
    pub skip_install: bool,
}

impl Cli {
    /// Apply flag overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut KindleConfig) {
        if let Some(url) = &self.template {
            config.template.url = url.clone();
        }
        if let Some(branch) = &self.branch {
            config.template.branch = Some(branch.clone());
        }
        if let Some(pm) = self.package_manager {
            config.package_manager = pm;
        }
    }
}

fn parse_package_manager(s: &str) -> Result<PackageManager, kindle_core::Error> {
    s.parse()
}

fn parse_license(s: &str) -> Result<License, kindle_core::Error> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_directory_is_optional_for_clap() {
        let cli = Cli::try_parse_from(["kindle"]).unwrap();
        assert!(cli.directory.is_none());
    }

    #[test]
    fn test_parse_full() {
        let cli = Cli::try_parse_from([
            "kindle",
            "my-app",
            "-vv",
            "--template",
            "/srv/template",
            "--branch",
            "next",
            "--package-manager",
            "pnpm",
            "--name",
            "my-app",
            "--license",
            "apache-2.0",
            "--skip-install",
        ])
        .unwrap();

        assert_eq!(cli.directory.as_deref(), Some("my-app"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.package_manager, Some(PackageManager::Pnpm));
        assert_eq!(cli.license, Some(License::Apache2));
        assert!(cli.skip_install);
    }

    #[test]
    fn test_invalid_license_rejected() {
        assert!(Cli::try_parse_from(["kindle", "x", "--license", "WTFPL"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::try_parse_from([
            "kindle",
            ".",
            "--template",
            "https://example.com/t.git",
            "--package-manager",
            "bun",
        ])
        .unwrap();

        let mut config = KindleConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.template.url, "https://example.com/t.git");
        assert!(config.template.branch.is_none());
        assert_eq!(config.package_manager, PackageManager::Bun);
    }
}
