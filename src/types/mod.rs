// ABOUTME: Validated domain types for repository paths and package artifacts.
// ABOUTME: Parsed once when the configuration is loaded.

mod artifact;
mod delete_paths;
mod repository_path;

pub use artifact::{ArtifactError, BACKUP_TIMESTAMP_FORMAT, DEFAULT_PACKAGE_ROOT, PackageArtifact};
pub use delete_paths::{DeletePaths, DeletePathsError};
pub use repository_path::{RepositoryPath, RepositoryPathError};
