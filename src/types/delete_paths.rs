// ABOUTME: Grouped repository paths scheduled for deletion.
// ABOUTME: Parses the ';'-separated groups of ','-separated paths in input order.

use nonempty::NonEmpty;
use std::fmt;
use thiserror::Error;

use super::repository_path::{RepositoryPath, RepositoryPathError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeletePathsError {
    #[error("invalid delete path: {0}")]
    InvalidPath(#[from] RepositoryPathError),
}

/// Delete-path configuration: independent groups, each holding one or more paths.
///
/// Groups and the paths inside them are processed strictly in the order they
/// were written. Use [`DeletePaths::iter`] to walk every path in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePaths {
    groups: NonEmpty<NonEmpty<RepositoryPath>>,
}

impl DeletePaths {
    /// Parse a delete-path specification such as `/a,/b;/c`.
    ///
    /// Returns `Ok(None)` when the specification is inactive: empty, or not
    /// starting with `/`. Entries are trimmed and empty entries skipped; every
    /// remaining entry must be a valid [`RepositoryPath`].
    pub fn parse(spec: &str) -> Result<Option<Self>, DeletePathsError> {
        if spec.is_empty() || !spec.starts_with('/') {
            return Ok(None);
        }

        let mut groups = Vec::new();
        for group in spec.split(';') {
            let paths = group
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(RepositoryPath::new)
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(paths) = NonEmpty::from_vec(paths) {
                groups.push(paths);
            }
        }

        Ok(NonEmpty::from_vec(groups).map(|groups| Self { groups }))
    }

    pub fn groups(&self) -> impl Iterator<Item = &NonEmpty<RepositoryPath>> {
        self.groups.iter()
    }

    /// Every path across all groups, in input order.
    pub fn iter(&self) -> impl Iterator<Item = &RepositoryPath> {
        self.groups.iter().flat_map(|group| group.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.len()).sum()
    }

    /// Always false: an active specification holds at least one path.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for DeletePaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(RepositoryPath::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join(";");
        write!(f, "{rendered}")
    }
}
