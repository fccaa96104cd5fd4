//! # kindle-core
//!
//! Core library for the kindle CLI providing:
//! - The answers collected for a new project (name, description, license)
//! - Invocation context resolution (target directory vs. working directory)
//! - Configuration loading (`~/.kindle/config.yaml` plus `KINDLE_*` overrides)

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::ConfigLoader;
pub use error::{Error, Result};
pub use types::{Answers, InvocationContext, KindleConfig, License, PackageManager};
pub use utils::get_home_dir;
