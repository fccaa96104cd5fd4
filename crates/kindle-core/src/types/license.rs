//! License choices offered for a generated project

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// License written into the manifest and README
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    /// MIT License
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    /// Apache License 2.0
    #[serde(rename = "Apache-2.0")]
    Apache2,
    /// GNU General Public License v3.0
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    /// BSD 3-Clause License
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    /// No license granted
    #[serde(rename = "UNLICENSED")]
    Unlicensed,
    /// Proprietary, all rights reserved
    #[serde(rename = "PROPRIETARY")]
    Proprietary,
}

impl License {
    /// Get all available licenses, in prompt order
    pub fn all() -> Vec<Self> {
        vec![
            Self::Mit,
            Self::Apache2,
            Self::Gpl3,
            Self::Bsd3Clause,
            Self::Unlicensed,
            Self::Proprietary,
        ]
    }

    /// Identifier written to `package.json`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPL-3.0",
            Self::Bsd3Clause => "BSD-3-Clause",
            Self::Unlicensed => "UNLICENSED",
            Self::Proprietary => "PROPRIETARY",
        }
    }

    /// Short explanation shown next to the choice in the prompt
    pub fn description(&self) -> &'static str {
        match self {
            Self::Mit => "Permissive, allows reuse with attribution",
            Self::Apache2 => "Permissive, with an explicit patent grant",
            Self::Gpl3 => "Copyleft, derivative works must stay open source",
            Self::Bsd3Clause => "Permissive, forbids using contributors' names for endorsement",
            Self::Unlicensed => "No license, others may not use the code",
            Self::Proprietary => "Closed source, all rights reserved",
        }
    }

    /// Comma separated list of identifiers, used in error messages
    pub fn available() -> String {
        Self::all()
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for License {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unknown_license(s, Self::available()))
    }
}
