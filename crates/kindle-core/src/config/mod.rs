//! Configuration loading

mod loader;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME, ENV_PACKAGE_MANAGER, ENV_TEMPLATE_BRANCH, ENV_TEMPLATE_URL};
