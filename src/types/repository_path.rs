// ABOUTME: Absolute node path in the remote repository's hierarchical namespace.
// ABOUTME: Validated on construction so every request targets a rooted path.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryPathError {
    #[error("repository path cannot be empty")]
    Empty,

    #[error("repository path must start with '/': {0}")]
    NotAbsolute(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryPath(String);

impl RepositoryPath {
    pub fn new(value: &str) -> Result<Self, RepositoryPathError> {
        if value.is_empty() {
            return Err(RepositoryPathError::Empty);
        }

        if !value.starts_with('/') {
            return Err(RepositoryPathError::NotAbsolute(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    /// The repository root, used by the save-all call.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RepositoryPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
