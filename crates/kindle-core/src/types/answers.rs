//! Answers collected from the user before scaffolding

use crate::error::{Error, Result};
use crate::types::License;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Name offered as the default in the name prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-vite-react-app";

/// Description offered as the default in the description prompt
pub const DEFAULT_DESCRIPTION: &str = "A TypeScript React project with Vite";

static PROJECT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("project name regex is valid"));

/// Validate a project name and return it trimmed.
///
/// A name is accepted when it is non-empty after trimming and consists only of
/// ASCII letters, digits, `_` and `-`.
pub fn validate_project_name(input: &str) -> Result<String> {
    let name = input.trim();

    if name.is_empty() {
        return Err(Error::invalid_project_name(input, "name cannot be empty"));
    }

    if !PROJECT_NAME_RE.is_match(name) {
        return Err(Error::invalid_project_name(
            input,
            "only letters, numbers, hyphens and underscores are allowed",
        ));
    }

    Ok(name.to_string())
}

/// Answers for a single scaffolding run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    name: String,
    description: String,
    license: License,
}

impl Answers {
    /// Build answers, validating the project name
    pub fn new(name: &str, description: impl Into<String>, license: License) -> Result<Self> {
        Ok(Self {
            name: validate_project_name(name)?,
            description: description.into(),
            license,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn license(&self) -> License {
        self.license
    }
}
