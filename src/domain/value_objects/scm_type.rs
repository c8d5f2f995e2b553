use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SCM (Source Control Management) kind of a synced role
///
/// Only git roles are synced; any other `scm` value in a requirements entry
/// fails to parse and the entry is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmType {
    /// Git version control system
    Git,
}

impl Default for ScmType {
    fn default() -> Self {
        Self::Git
    }
}

impl fmt::Display for ScmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScmType::Git => write!(f, "git"),
        }
    }
}

impl FromStr for ScmType {
    type Err = ScmTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "git" => Ok(ScmType::Git),
            _ => Err(ScmTypeError::UnsupportedScmType(s.to_string())),
        }
    }
}

impl ScmType {
    /// Get the metadata directory name for this SCM
    pub fn metadata_dir(&self) -> &'static str {
        match self {
            ScmType::Git => ".git",
        }
    }

    /// Get the standard executable name for this SCM
    pub fn executable_name(&self) -> &'static str {
        match self {
            ScmType::Git => "git",
        }
    }
}

/// Errors related to SCM type parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScmTypeError {
    #[error("Unsupported SCM type: {0}")]
    UnsupportedScmType(String),
}
