//! `kindle <directory>` command handler

use anyhow::{Context, Result};
use camino::Utf8Path;
use indicatif::ProgressBar;
use kindle_core::types::{Answers, InvocationContext, KindleConfig, PackageManager};
use kindle_core::ConfigLoader;
use kindle_projects::templates::check_target;
use kindle_projects::{ScaffoldOptions, ScaffoldReport, Scaffolder, Step, StepObserver};
use std::cell::RefCell;

use crate::cli::Cli;
use crate::output;
use crate::prompt::{collect_answers, DialoguerPrompter, Prefilled};

/// Create a new project from the template
pub async fn run(cli: Cli, cwd: &Utf8Path) -> Result<()> {
    // Usage errors surface unwrapped so the top-level handler can recognize them
    let ctx = InvocationContext::resolve(cli.directory.as_deref(), cwd)?;

    let config = load_config(&cli)?;
    tracing::debug!("Using template {}", config.template.url);

    output::framed(&[
        console::style("kindle").bold().to_string(),
        "Vite + React + TypeScript project setup".to_string(),
    ]);
    output::kv("Target", ctx.target().as_str());
    println!();

    // Fail before asking anything when the target cannot be used
    check_target(&ctx).await?;

    let prefilled = Prefilled {
        name: cli.name.clone(),
        description: cli.description.clone(),
        license: cli.license,
    };
    let answers = collect_answers(&prefilled, &mut DialoguerPrompter::new())
        .context("Failed to collect project details")?;
    println!();

    let mut options = ScaffoldOptions::from(&config);
    options.skip_install = cli.skip_install;
    let package_manager = options.package_manager;

    let observer = ProgressObserver::new(package_manager);
    let report = Scaffolder::new(options)
        .run(&ctx, &answers, &observer)
        .await
        .context("Failed to create project")?;

    print_summary(&ctx, &answers, &report, package_manager);
    Ok(())
}

/// Load the config file, then apply flag overrides
fn load_config(cli: &Cli) -> Result<KindleConfig> {
    let mut config = ConfigLoader::new()
        .load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

/// Renders pipeline progress: a spinner while cloning, status lines otherwise
struct ProgressObserver {
    package_manager: PackageManager,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ProgressObserver {
    fn new(package_manager: PackageManager) -> Self {
        Self {
            package_manager,
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl StepObserver for ProgressObserver {
    fn on_step_start(&self, step: Step) {
        match step {
            Step::FetchTemplate => {
                *self.spinner.borrow_mut() = Some(output::spinner(&format!("{}...", step)));
            }
            // Install output streams to the terminal, a spinner would garble it
            Step::InstallDependencies => {
                output::info(&format!(
                    "Installing dependencies with {}...",
                    self.package_manager
                ));
            }
            _ => {}
        }
    }

    fn on_step_finished(&self, step: Step) {
        self.clear_spinner();
        output::success(step.description());
    }

    fn on_step_failed(&self, _step: Step, _error: &dyn std::error::Error) {
        self.clear_spinner();
    }
}

/// Commands the user runs next
fn next_steps(
    ctx: &InvocationContext,
    report: &ScaffoldReport,
    package_manager: PackageManager,
) -> Vec<String> {
    let mut steps = Vec::new();
    if !report.is_current_dir {
        steps.push(format!("cd {}", ctx.raw_arg()));
    }
    if !report.dependencies_installed {
        steps.push(package_manager.install_command());
    }
    steps.push(package_manager.run_script("dev"));
    steps
}

fn summary_lines(
    ctx: &InvocationContext,
    answers: &Answers,
    report: &ScaffoldReport,
    package_manager: PackageManager,
) -> Vec<String> {
    let mut lines = vec![
        console::style("Project created successfully").green().bold().to_string(),
        String::new(),
        format!("Location:    {}", report.project_dir),
        format!("Name:        {}", answers.name()),
        format!("Description: {}", answers.description()),
        format!("License:     {}", answers.license()),
        String::new(),
        "Next steps:".to_string(),
    ];
    lines.extend(
        next_steps(ctx, report, package_manager)
            .into_iter()
            .map(|step| format!("  {}", console::style(step).cyan())),
    );
    lines
}

fn print_summary(
    ctx: &InvocationContext,
    answers: &Answers,
    report: &ScaffoldReport,
    package_manager: PackageManager,
) {
    println!();
    output::framed(&summary_lines(ctx, answers, report, package_manager));
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindle_core::types::License;

    fn context(arg: &str) -> InvocationContext {
        InvocationContext::resolve(Some(arg), Utf8Path::new("/work")).unwrap()
    }

    fn report_for(ctx: &InvocationContext, dependencies_installed: bool) -> ScaffoldReport {
        ScaffoldReport {
            project_dir: ctx.target().to_path_buf(),
            is_current_dir: ctx.is_current_dir(),
            dependencies_installed,
        }
    }

    #[test]
    fn test_next_steps_new_directory() {
        let ctx = context("my-app");
        let steps = next_steps(&ctx, &report_for(&ctx, true), PackageManager::Npm);
        assert_eq!(steps, vec!["cd my-app", "npm run dev"]);
    }

    #[test]
    fn test_next_steps_current_directory_has_no_cd() {
        let ctx = context(".");
        let steps = next_steps(&ctx, &report_for(&ctx, true), PackageManager::Npm);
        assert_eq!(steps, vec!["npm run dev"]);
    }

    #[test]
    fn test_next_steps_skipped_install() {
        let ctx = context("apps/web");
        let steps = next_steps(&ctx, &report_for(&ctx, false), PackageManager::Pnpm);
        assert_eq!(steps, vec!["cd apps/web", "pnpm install", "pnpm run dev"]);
    }

    #[test]
    fn test_summary_lines() {
        let ctx = context("my-app");
        let answers = Answers::new("my-app", "demo", License::Apache2).unwrap();
        let report = report_for(&ctx, true);

        let plain: Vec<String> = summary_lines(&ctx, &answers, &report, PackageManager::Npm)
            .iter()
            .map(|l| console::strip_ansi_codes(l).to_string())
            .collect();

        assert!(plain.contains(&"Location:    /work/my-app".to_string()));
        assert!(plain.contains(&"License:     Apache-2.0".to_string()));
        assert_eq!(plain.last().map(String::as_str), Some("  npm run dev"));
    }
}
