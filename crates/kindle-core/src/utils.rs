//! Shared utility functions for kindle crates

use camino::Utf8PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that an
/// overridden HOME (CI, containers) is respected.
pub fn get_home_dir() -> Option<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Some(Utf8PathBuf::from(home));
        }
    }

    dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_home_dir_from_env() {
        // HOME is typically set in CI/test environments
        if std::env::var("HOME").is_ok_and(|h| !h.is_empty()) {
            let home = get_home_dir().unwrap();
            assert!(!home.as_str().is_empty());
        }
    }
}
