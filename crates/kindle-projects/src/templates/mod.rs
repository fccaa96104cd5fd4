//! Template handling for project scaffolding.
//!
//! - `fetcher`: materialize the template repository in the target directory
//! - `readme`: render the project README from the collected answers

pub mod fetcher;
pub mod readme;

pub use fetcher::{
    check_target, strip_template_artifacts, TemplateFetcher, TemplateSource,
    DEPENDENCY_CACHE_DIR, TEMPLATE_README, VCS_DIR,
};
pub use readme::{render_readme, write_readme, README_FILE};
