//! Scaffolding pipeline
//!
//! Runs the steps that turn the template into a new project, strictly in
//! order, each awaited before the next starts:
//!
//! 1. fetch the template (target check happens before any write)
//! 2. update `package.json`
//! 3. write `README.md`
//! 4. `git init`
//! 5. `<package manager> install`
//!
//! There is no rollback: when a step fails the target keeps whatever the
//! earlier steps produced.

use crate::error::Result;
use crate::git::{init_repository, InitOptions};
use crate::install::install_dependencies;
use crate::manifest::update_manifest;
use crate::templates::{write_readme, TemplateFetcher, TemplateSource};
use camino::{Utf8Path, Utf8PathBuf};
use kindle_core::types::{Answers, InvocationContext, KindleConfig, PackageManager};
use tracing::{debug, error, info};

/// A single pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FetchTemplate,
    UpdateManifest,
    WriteReadme,
    InitRepository,
    InstallDependencies,
}

impl Step {
    /// Progress message shown while the step runs
    pub fn description(&self) -> &'static str {
        match self {
            Self::FetchTemplate => "Cloning template",
            Self::UpdateManifest => "Updating package.json",
            Self::WriteReadme => "Generating README.md",
            Self::InitRepository => "Initializing git repository",
            Self::InstallDependencies => "Installing dependencies",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Observer for pipeline progress
///
/// Implement this to render progress (spinners, status lines) while the
/// pipeline runs. All methods default to doing nothing.
pub trait StepObserver {
    /// Called right before a step starts
    fn on_step_start(&self, _step: Step) {}

    /// Called after a step completed
    fn on_step_finished(&self, _step: Step) {}

    /// Called when a step failed; the pipeline stops afterwards
    fn on_step_failed(&self, _step: Step, _error: &dyn std::error::Error) {}
}

/// Observer that only logs through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn on_step_start(&self, step: Step) {
        info!("{}...", step);
    }

    fn on_step_finished(&self, step: Step) {
        debug!("{} done", step);
    }

    fn on_step_failed(&self, step: Step, error: &dyn std::error::Error) {
        error!("{} failed: {}", step, error);
    }
}

/// Options for a scaffolding run
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Template to clone
    pub template: TemplateSource,
    /// Package manager for install and README instructions
    pub package_manager: PackageManager,
    /// Options for `git init`
    pub git: InitOptions,
    /// Skip the dependency installation step
    pub skip_install: bool,
}

impl From<&KindleConfig> for ScaffoldOptions {
    fn from(config: &KindleConfig) -> Self {
        Self {
            template: TemplateSource::from(&config.template),
            package_manager: config.package_manager,
            git: InitOptions::from(&config.git),
            skip_install: false,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Directory holding the new project
    pub project_dir: Utf8PathBuf,
    /// Whether the project was created in the working directory
    pub is_current_dir: bool,
    /// Whether dependencies were installed
    pub dependencies_installed: bool,
}

/// Runs the scaffolding pipeline
#[derive(Debug, Clone)]
pub struct Scaffolder {
    options: ScaffoldOptions,
}

impl Scaffolder {
    pub fn new(options: ScaffoldOptions) -> Self {
        Self { options }
    }

    /// Run every step for `ctx` with the collected `answers`
    pub async fn run(
        &self,
        ctx: &InvocationContext,
        answers: &Answers,
        observer: &dyn StepObserver,
    ) -> Result<ScaffoldReport> {
        let target = ctx.target();
        let fetcher = TemplateFetcher::new(self.options.template.clone());

        observe(observer, Step::FetchTemplate, fetcher.fetch(ctx)).await?;

        observe(
            observer,
            Step::UpdateManifest,
            update_manifest(target, answers),
        )
        .await?;

        observe(
            observer,
            Step::WriteReadme,
            write_readme_step(target, answers, self.options.package_manager),
        )
        .await?;

        observe(
            observer,
            Step::InitRepository,
            init_repository(target, &self.options.git),
        )
        .await?;

        if self.options.skip_install {
            info!("Skipping dependency installation");
        } else {
            observe(
                observer,
                Step::InstallDependencies,
                install_dependencies(target, self.options.package_manager),
            )
            .await?;
        }

        Ok(ScaffoldReport {
            project_dir: target.to_path_buf(),
            is_current_dir: ctx.is_current_dir(),
            dependencies_installed: !self.options.skip_install,
        })
    }
}

async fn write_readme_step(
    target: &Utf8Path,
    answers: &Answers,
    package_manager: PackageManager,
) -> Result<()> {
    write_readme(target, answers, package_manager).await?;
    Ok(())
}

/// Await one step, notifying the observer around it
async fn observe<F>(observer: &dyn StepObserver, step: Step, fut: F) -> Result<()>
where
    F: std::future::Future<Output = Result<()>>,
{
    observer.on_step_start(step);
    match fut.await {
        Ok(()) => {
            observer.on_step_finished(step);
            Ok(())
        }
        Err(e) => {
            observer.on_step_failed(step, &e);
            Err(e)
        }
    }
}
