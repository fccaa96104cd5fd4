//! Template fetching: materialize the template repository in the target directory.
//!
//! Two paths lead to the same result:
//! - a new directory is cloned into directly;
//! - the current directory is cloned into a sibling temporary directory first and
//!   merged, since `git clone` refuses non-empty destinations.
//!
//! Either way the target ends up holding the template's files without its git
//! history and without its README.

use crate::error::{Error, Result};
use crate::git::{clone_repository, ensure_git_available, CloneOptions};
use camino::{Utf8Path, Utf8PathBuf};
use kindle_core::types::{InvocationContext, TemplateConfig};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;
use walkdir::WalkDir;

/// Version-control metadata directory
pub const VCS_DIR: &str = ".git";

/// Dependency cache directory
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// README bundled with the template, replaced by a generated one
pub const TEMPLATE_README: &str = "README.md";

/// Entries allowed in the current directory before scaffolding into it
const ALLOWED_IN_CURRENT_DIR: &[&str] = &[VCS_DIR, DEPENDENCY_CACHE_DIR];

/// Where to clone the template from
#[derive(Debug, Clone)]
pub struct TemplateSource {
    /// Repository URL or local path
    pub url: String,
    /// Clone options (branch, depth)
    pub clone: CloneOptions,
}

impl From<&TemplateConfig> for TemplateSource {
    fn from(config: &TemplateConfig) -> Self {
        Self {
            url: config.url.clone(),
            clone: CloneOptions {
                depth: config.depth,
                branch: config.branch.clone(),
            },
        }
    }
}

/// Materializes the template into a target directory
#[derive(Debug, Clone)]
pub struct TemplateFetcher {
    source: TemplateSource,
}

impl TemplateFetcher {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    /// Fetch the template into `ctx.target()`.
    ///
    /// The target is checked before anything is written; a failed check
    /// leaves the filesystem untouched.
    pub async fn fetch(&self, ctx: &InvocationContext) -> Result<()> {
        check_target(ctx).await?;
        ensure_git_available()?;

        let target = ctx.target();
        if ctx.is_current_dir() {
            self.clone_via_temp_dir(target).await?;
        } else {
            clone_repository(&self.source.url, target, &self.source.clone).await?;
        }

        strip_template_artifacts(target).await?;
        info!("Template ready at {}", target);
        Ok(())
    }

    /// Clone next to `target`, merge into it, then remove the temporary clone
    async fn clone_via_temp_dir(&self, target: &Utf8Path) -> Result<()> {
        let parent = target
            .parent()
            .ok_or_else(|| Error::invalid_path(target.as_str()))?;
        let temp_dir = parent.join(format!(".kindle-{}", Uuid::new_v4().simple()));

        debug!("Cloning into temporary directory {}", temp_dir);
        if let Err(e) = clone_repository(&self.source.url, &temp_dir, &self.source.clone).await {
            remove_temp_dir(&temp_dir).await;
            return Err(e);
        }

        let from = temp_dir.clone();
        let to = target.to_path_buf();
        let copied = tokio::task::spawn_blocking(move || {
            copy_tree(&from, &to, &[VCS_DIR, DEPENDENCY_CACHE_DIR])
        })
        .await
        .map_err(|e| Error::process_execution(format!("copy task failed: {}", e)));

        remove_temp_dir(&temp_dir).await;
        copied?
    }
}

/// Verify the target can receive the template.
///
/// - A directory other than the current one must not exist yet.
/// - The current directory may only contain `.git` and `node_modules`.
pub async fn check_target(ctx: &InvocationContext) -> Result<()> {
    let target = ctx.target();

    if !ctx.is_current_dir() {
        if tokio::fs::symlink_metadata(target).await.is_ok() {
            return Err(Error::directory_exists(target.as_str()));
        }
        return Ok(());
    }

    let mut offending = Vec::new();
    let mut entries = tokio::fs::read_dir(target).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !ALLOWED_IN_CURRENT_DIR.contains(&name.as_str()) {
            offending.push(name);
        }
    }

    if !offending.is_empty() {
        offending.sort();
        return Err(Error::directory_not_empty(target.as_str(), &offending));
    }

    Ok(())
}

/// Remove the template's git history and README from `target`
pub async fn strip_template_artifacts(target: &Utf8Path) -> Result<()> {
    remove_if_exists(&target.join(VCS_DIR)).await?;
    remove_if_exists(&target.join(TEMPLATE_README)).await?;
    Ok(())
}

async fn remove_if_exists(path: &Utf8Path) -> Result<()> {
    let metadata = match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    debug!("Removing {}", path);
    if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await?;
    } else {
        tokio::fs::remove_file(path).await?;
    }
    Ok(())
}

async fn remove_temp_dir(path: &Utf8PathBuf) {
    if let Err(e) = remove_if_exists(path).await {
        warn!("Failed to remove temporary directory {}: {}", path, e);
    }
}

/// Recursively copy `from` into `to`, skipping the named top-level entries.
/// Existing files in `to` are overwritten.
fn copy_tree(from: &Utf8Path, to: &Utf8Path, skip: &[&str]) -> Result<()> {
    let walker = WalkDir::new(from).min_depth(1).into_iter().filter_entry(|entry| {
        !(entry.depth() == 1
            && skip
                .iter()
                .any(|name| entry.file_name() == std::ffi::OsStr::new(name)))
    });

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(from.as_std_path())
            .map_err(|_| Error::invalid_path(entry.path().display().to_string()))?;
        let dest = to.as_std_path().join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&dest)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> Result<()> {
    let link = fs::read_link(src)?;
    if fs::symlink_metadata(dest).is_ok() {
        fs::remove_file(dest)?;
    }
    std::os::unix::fs::symlink(link, dest)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    #[tokio::test]
    async fn test_new_directory_must_not_exist() {
        let temp = TempDir::new().unwrap();
        let cwd = utf8(&temp);
        fs::create_dir(cwd.join("existing-dir")).unwrap();

        let ctx = InvocationContext::resolve(Some("existing-dir"), &cwd).unwrap();
        assert!(matches!(
            check_target(&ctx).await,
            Err(Error::DirectoryExists { .. })
        ));

        let ctx = InvocationContext::resolve(Some("fresh"), &cwd).unwrap();
        check_target(&ctx).await.unwrap();
    }

    #[tokio::test]
    async fn test_existing_file_counts_as_existing() {
        let temp = TempDir::new().unwrap();
        let cwd = utf8(&temp);
        fs::write(cwd.join("taken"), "x").unwrap();

        let ctx = InvocationContext::resolve(Some("taken"), &cwd).unwrap();
        assert!(matches!(
            check_target(&ctx).await,
            Err(Error::DirectoryExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_current_directory_allows_vcs_and_cache() {
        let temp = TempDir::new().unwrap();
        let cwd = utf8(&temp);
        let ctx = InvocationContext::resolve(Some("."), &cwd).unwrap();

        check_target(&ctx).await.unwrap();

        fs::create_dir(cwd.join(".git")).unwrap();
        fs::create_dir(cwd.join("node_modules")).unwrap();
        check_target(&ctx).await.unwrap();
    }

    #[tokio::test]
    async fn test_current_directory_rejects_other_entries() {
        let temp = TempDir::new().unwrap();
        let cwd = utf8(&temp);
        fs::create_dir(cwd.join(".git")).unwrap();
        fs::write(cwd.join("notes.txt"), "hello").unwrap();
        fs::write(cwd.join(".env"), "A=1").unwrap();

        let ctx = InvocationContext::resolve(Some("."), &cwd).unwrap();
        match check_target(&ctx).await {
            Err(Error::DirectoryNotEmpty { entries, .. }) => {
                assert_eq!(entries, ".env, notes.txt");
            }
            other => panic!("expected DirectoryNotEmpty, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(cwd.join("notes.txt")).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_strip_template_artifacts() {
        let temp = TempDir::new().unwrap();
        let target = utf8(&temp);
        fs::create_dir_all(target.join(".git/objects")).unwrap();
        fs::write(target.join("README.md"), "# template").unwrap();
        fs::write(target.join("package.json"), "{}").unwrap();

        strip_template_artifacts(&target).await.unwrap();

        assert!(!target.join(".git").exists());
        assert!(!target.join("README.md").exists());
        assert!(target.join("package.json").exists());

        // Nothing left to strip is not an error
        strip_template_artifacts(&target).await.unwrap();
    }

    #[test]
    fn test_copy_tree_skips_top_level_entries() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let from = utf8(&src);
        let to = utf8(&dst);

        fs::create_dir_all(from.join("src/components")).unwrap();
        fs::write(from.join("src/components/App.tsx"), "app").unwrap();
        fs::write(from.join("package.json"), "{}").unwrap();
        fs::create_dir_all(from.join(".git/refs")).unwrap();
        fs::create_dir_all(from.join("node_modules/react")).unwrap();
        // Only top-level entries are skipped
        fs::create_dir_all(from.join("src/node_modules")).unwrap();

        fs::create_dir_all(to.join("node_modules/keep")).unwrap();
        fs::write(to.join("package.json"), "old").unwrap();

        copy_tree(&from, &to, &[VCS_DIR, DEPENDENCY_CACHE_DIR]).unwrap();

        assert_eq!(
            fs::read_to_string(to.join("src/components/App.tsx")).unwrap(),
            "app"
        );
        assert_eq!(fs::read_to_string(to.join("package.json")).unwrap(), "{}");
        assert!(!to.join(".git").exists());
        assert!(!to.join("node_modules/react").exists());
        assert!(to.join("node_modules/keep").exists());
        assert!(to.join("src/node_modules").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_preserves_symlinks() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let from = utf8(&src);
        let to = utf8(&dst);

        fs::write(from.join("real.txt"), "data").unwrap();
        std::os::unix::fs::symlink("real.txt", from.join("link.txt")).unwrap();

        copy_tree(&from, &to, &[]).unwrap();

        assert_eq!(
            fs::read_link(to.join("link.txt")).unwrap(),
            std::path::PathBuf::from("real.txt")
        );
    }

    #[test]
    fn test_template_source_from_config() {
        let config = TemplateConfig {
            url: "https://example.com/t.git".to_string(),
            branch: Some("v2".to_string()),
            depth: None,
        };
        let source = TemplateSource::from(&config);
        assert_eq!(source.url, "https://example.com/t.git");
        assert_eq!(source.clone.branch.as_deref(), Some("v2"));
        assert!(source.clone.depth.is_none());
    }
}
