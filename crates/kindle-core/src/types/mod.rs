//! Type definitions for kindle answers, licenses and configuration

mod answers;
mod config_types;
mod context;
mod license;
mod package_manager;

pub use answers::*;
pub use config_types::*;
pub use context::*;
pub use license::*;
pub use package_manager::*;
