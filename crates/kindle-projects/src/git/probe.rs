//! Git availability probe

use crate::error::{Error, Result};
use tracing::debug;

/// Whether a `git` executable can be found on PATH
pub fn is_git_available() -> bool {
    match which::which("git") {
        Ok(path) => {
            debug!("Found git at {}", path.display());
            true
        }
        Err(e) => {
            debug!("git not found on PATH: {}", e);
            false
        }
    }
}

/// Fail with [`Error::GitNotFound`] unless git is on PATH
pub fn ensure_git_available() -> Result<()> {
    if is_git_available() {
        Ok(())
    } else {
        Err(Error::GitNotFound)
    }
}
