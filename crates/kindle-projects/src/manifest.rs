//! package.json manifest updates

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use kindle_core::types::Answers;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Manifest file name inside the project directory
pub const MANIFEST_FILE: &str = "package.json";

/// Path of the manifest inside `project_dir`
pub fn manifest_path(project_dir: &Utf8Path) -> Utf8PathBuf {
    project_dir.join(MANIFEST_FILE)
}

/// Overwrite `name`, `description` and `license` in the project's manifest.
///
/// All other fields keep their value and position. The file is rewritten only
/// after it has been read and parsed successfully, so a malformed manifest is
/// left as it was.
pub async fn update_manifest(project_dir: &Utf8Path, answers: &Answers) -> Result<()> {
    let path = manifest_path(project_dir);
    info!("Updating manifest: {}", path);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::manifest_not_found(path.as_str()));
        }
        Err(e) => return Err(e.into()),
    };

    let updated = apply_answers(&path, &content, answers)?;

    tokio::fs::write(&path, updated).await?;
    debug!("Manifest written");
    Ok(())
}

/// Apply the answers to manifest text and return the new text
fn apply_answers(path: &Utf8Path, content: &str, answers: &Answers) -> Result<String> {
    let mut manifest: Map<String, Value> = match serde_json::from_str(content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return Err(Error::invalid_manifest(
                path.as_str(),
                "expected a JSON object at the top level",
            ))
        }
        Err(e) => return Err(Error::invalid_manifest(path.as_str(), e.to_string())),
    };

    // Insert keeps the position of keys that already exist
    manifest.insert("name".to_string(), Value::from(answers.name()));
    manifest.insert("description".to_string(), Value::from(answers.description()));
    manifest.insert(
        "license".to_string(),
        Value::from(answers.license().as_str()),
    );

    Ok(to_pretty_json(&manifest)?)
}

/// Serialize with two-space indentation and a trailing newline
fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
