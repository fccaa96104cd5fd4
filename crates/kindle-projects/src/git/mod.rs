//! Git operations module
//!
//! Async wrappers around the `git` binary used while scaffolding:
//! - Availability probe (before any clone)
//! - Cloning the template repository
//! - Initializing the fresh repository of the generated project
//!
//! # Examples
//!
//! ```no_run
//! use kindle_projects::git::{clone_repository, ensure_git_available, CloneOptions};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! ensure_git_available()?;
//! let options = CloneOptions {
//!     depth: Some(1),
//!     ..Default::default()
//! };
//! clone_repository(
//!     "https://github.com/user/template.git",
//!     Utf8Path::new("/tmp/my-app"),
//!     &options,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

mod clone;
mod init;
mod probe;

// Re-export public API
pub use clone::{clone_repository, CloneOptions};
pub use init::{init_repository, InitOptions};
pub use probe::{ensure_git_available, is_git_available};
