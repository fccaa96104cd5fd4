//! # kindle-projects
//!
//! Scaffolding library for the kindle CLI providing:
//! - Template fetching (clone, merge into the working directory, strip history)
//! - Git operations (availability probe, clone, init)
//! - `package.json` updates and README generation
//! - Dependency installation
//! - The [`Scaffolder`] pipeline that runs those steps in order
//!
//! # Examples
//!
//! ```no_run
//! use kindle_core::types::{Answers, InvocationContext, KindleConfig, License};
//! use kindle_projects::{ScaffoldOptions, Scaffolder, TracingObserver};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = InvocationContext::resolve(Some("my-app"), Utf8Path::new("/work"))?;
//! let answers = Answers::new("my-app", "demo", License::Mit)?;
//!
//! let scaffolder = Scaffolder::new(ScaffoldOptions::from(&KindleConfig::default()));
//! let report = scaffolder.run(&ctx, &answers, &TracingObserver).await?;
//! println!("created {}", report.project_dir);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod install;
pub mod manifest;
pub mod scaffold;
pub mod templates;

pub use error::{Error, Result};
pub use scaffold::{ScaffoldOptions, ScaffoldReport, Scaffolder, Step, StepObserver, TracingObserver};
