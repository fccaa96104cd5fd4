//! Invocation context: where the project is going to be created

use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Resolved target of a single run.
///
/// Built once from the positional argument and the process working directory;
/// everything downstream receives it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    raw_arg: String,
    cwd: Utf8PathBuf,
    target: Utf8PathBuf,
    is_current_dir: bool,
}

impl InvocationContext {
    /// Resolve the directory argument against `cwd`.
    ///
    /// Fails with [`Error::MissingDirectory`] when no argument was supplied.
    /// Path legality is not checked here.
    pub fn resolve(raw_arg: Option<&str>, cwd: &Utf8Path) -> Result<Self> {
        let raw_arg = match raw_arg {
            Some(arg) if !arg.trim().is_empty() => arg.to_string(),
            _ => return Err(Error::MissingDirectory),
        };

        let cwd = normalize(cwd);
        let target = normalize(&cwd.join(&raw_arg));
        let is_current_dir = same_dir(&target, &cwd);

        Ok(Self {
            raw_arg,
            cwd,
            target,
            is_current_dir,
        })
    }

    /// Read the working directory of the process
    pub fn current_dir() -> Result<Utf8PathBuf> {
        let cwd = std::env::current_dir()?;
        Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| Error::non_utf8_path(p.to_string_lossy().into_owned()))
    }

    /// The argument exactly as it was typed
    pub fn raw_arg(&self) -> &str {
        &self.raw_arg
    }

    pub fn cwd(&self) -> &Utf8Path {
        &self.cwd
    }

    /// Absolute, normalized target directory
    pub fn target(&self) -> &Utf8Path {
        &self.target
    }

    /// Whether the target is the working directory itself
    pub fn is_current_dir(&self) -> bool {
        self.is_current_dir
    }
}

/// Lexically remove `.` and `..` components
fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Utf8Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_str()),
        }
    }
    out
}

fn same_dir(a: &Utf8Path, b: &Utf8Path) -> bool {
    if a == b {
        return true;
    }
    // Symlinked spellings of the same directory
    match (a.canonicalize_utf8(), b.canonicalize_utf8()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument() {
        let cwd = Utf8Path::new("/work");
        assert!(matches!(
            InvocationContext::resolve(None, cwd),
            Err(Error::MissingDirectory)
        ));
        assert!(matches!(
            InvocationContext::resolve(Some("  "), cwd),
            Err(Error::MissingDirectory)
        ));
    }

    #[test]
    fn test_relative_argument() {
        let ctx = InvocationContext::resolve(Some("my-app"), Utf8Path::new("/work")).unwrap();
        assert_eq!(ctx.target(), Utf8Path::new("/work/my-app"));
        assert_eq!(ctx.raw_arg(), "my-app");
        assert!(!ctx.is_current_dir());
    }

    #[test]
    fn test_absolute_argument() {
        let ctx = InvocationContext::resolve(Some("/tmp/app"), Utf8Path::new("/work")).unwrap();
        assert_eq!(ctx.target(), Utf8Path::new("/tmp/app"));
    }

    #[test]
    fn test_dot_is_current_dir() {
        let cwd = Utf8Path::new("/work/projects");
        for arg in [".", "./", "../projects", "./nested/.."] {
            let ctx = InvocationContext::resolve(Some(arg), cwd).unwrap();
            assert_eq!(ctx.target(), cwd, "{arg}");
            assert!(ctx.is_current_dir(), "{arg}");
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Utf8Path::new("/a/./b/../c")),
            Utf8PathBuf::from("/a/c")
        );
        assert_eq!(normalize(Utf8Path::new("/..")), Utf8PathBuf::from("/"));
        assert_eq!(normalize(Utf8Path::new("../x")), Utf8PathBuf::from("../x"));
    }

    #[test]
    fn test_current_dir_is_utf8() {
        let cwd = InvocationContext::current_dir().unwrap();
        assert!(cwd.is_absolute());
    }
}
