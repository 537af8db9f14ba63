// ABOUTME: Local package artifact to deploy.
// ABOUTME: Derives the remote install path and the timestamped backup file name.

use chrono::NaiveDateTime;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Package manager folder used when no install path override is configured.
pub const DEFAULT_PACKAGE_ROOT: &str = "/etc/packages";

/// Timestamp layout of backup archives (minute resolution).
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("package path has no file name: {0}")]
    NoFileName(PathBuf),

    #[error("package file name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageArtifact {
    path: PathBuf,
    file_name: String,
}

impl PackageArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ArtifactError> {
        let path = path.into();
        let file_name = path
            .file_name()
            .ok_or_else(|| ArtifactError::NoFileName(path.clone()))?
            .to_str()
            .ok_or_else(|| ArtifactError::InvalidFileName(path.clone()))?
            .to_string();

        Ok(Self { path, file_name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension, e.g. `app.zip`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name without its last extension, e.g. `app` for `app.zip`.
    pub fn base_name(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(0) | None => &self.file_name,
            Some(dot) => &self.file_name[..dot],
        }
    }

    /// Remote path the uploaded package is installed from.
    ///
    /// An empty override falls back to [`DEFAULT_PACKAGE_ROOT`].
    pub fn install_path(&self, override_root: Option<&str>) -> String {
        let root = override_root
            .map(|root| root.trim_end_matches('/'))
            .filter(|root| !root.is_empty())
            .unwrap_or(DEFAULT_PACKAGE_ROOT);
        format!("{}/{}", root, self.file_name)
    }

    /// Backup archive name: `<base>_<yyyyMMdd-HHmm>.zip`.
    ///
    /// Two backups taken within the same minute get the same name.
    pub fn backup_file_name(&self, taken_at: NaiveDateTime) -> String {
        format!(
            "{}_{}.zip",
            self.base_name(),
            taken_at.format(BACKUP_TIMESTAMP_FORMAT)
        )
    }
}

impl fmt::Display for PackageArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
