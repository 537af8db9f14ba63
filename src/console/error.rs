// ABOUTME: Error types for console operations.
// ABOUTME: One variant per workflow step, each carrying the underlying failure.

use reqwest::StatusCode;
use std::path::PathBuf;

use crate::http::HttpError;
use crate::types::RepositoryPath;

/// Why a single console call failed.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// The server answered with a status other than the expected one.
    #[error("response={status}{}", with_diagnostic(.diagnostic))]
    Status {
        status: StatusCode,
        diagnostic: String,
    },

    /// The request never completed (timeout, refused connection, protocol error).
    #[error(transparent)]
    Network(#[from] HttpError),

    /// Install answered 200 without the confirmation text.
    #[error("response does not confirm the installation{}", with_diagnostic(.diagnostic))]
    MissingMarker { diagnostic: String },

    /// Install answered 200 with an empty body.
    #[error("empty response")]
    EmptyBody,

    /// The local backup folder cannot be used.
    #[error("{} {problem}", .path.display())]
    Folder {
        path: PathBuf,
        problem: FolderProblem,
    },

    /// Reading the package or writing the backup file failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

/// Reasons a backup folder is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FolderProblem {
    #[error("cannot be created")]
    NotCreatable,
    #[error("cannot be written")]
    NotWritable,
    #[error("is not a directory")]
    NotADirectory,
}

fn with_diagnostic(diagnostic: &str) -> String {
    if diagnostic.is_empty() {
        String::new()
    } else {
        format!(" ({diagnostic})")
    }
}

impl Failure {
    pub fn status(status: StatusCode, diagnostic: impl Into<String>) -> Self {
        Failure::Status {
            status,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Failure::Io {
            context: context.into(),
            source,
        }
    }

    /// Diagnostic text scraped from the response body, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Failure::Status { diagnostic, .. } | Failure::MissingMarker { diagnostic } => {
                Some(diagnostic.as_str()).filter(|d| !d.is_empty())
            }
            _ => None,
        }
    }
}

/// Errors from console operations, one variant per workflow step.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("login failed: {0}")]
    Authentication(Failure),

    #[error("getting definitions for node {path} failed: {failure}")]
    RepositoryQuery {
        path: RepositoryPath,
        failure: Failure,
    },

    #[error("checking out node {path} failed: {failure}")]
    Checkout {
        path: RepositoryPath,
        failure: Failure,
    },

    #[error("checking in node {path} failed: {failure}")]
    Checkin {
        path: RepositoryPath,
        failure: Failure,
    },

    #[error("removing node {path} failed: {failure}")]
    Deletion {
        path: RepositoryPath,
        failure: Failure,
    },

    #[error("package upload failed: {0}")]
    Upload(Failure),

    #[error("Error installing package: {0}")]
    Install(Failure),

    #[error("back-up failed: {0}")]
    Backup(Failure),

    #[error("save all changes failed: {0}")]
    Commit(Failure),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleErrorKind {
    Authentication,
    RepositoryQuery,
    Checkout,
    Checkin,
    Deletion,
    Upload,
    Install,
    Backup,
    Commit,
}

impl ConsoleError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ConsoleErrorKind {
        match self {
            ConsoleError::Authentication(_) => ConsoleErrorKind::Authentication,
            ConsoleError::RepositoryQuery { .. } => ConsoleErrorKind::RepositoryQuery,
            ConsoleError::Checkout { .. } => ConsoleErrorKind::Checkout,
            ConsoleError::Checkin { .. } => ConsoleErrorKind::Checkin,
            ConsoleError::Deletion { .. } => ConsoleErrorKind::Deletion,
            ConsoleError::Upload(_) => ConsoleErrorKind::Upload,
            ConsoleError::Install(_) => ConsoleErrorKind::Install,
            ConsoleError::Backup(_) => ConsoleErrorKind::Backup,
            ConsoleError::Commit(_) => ConsoleErrorKind::Commit,
        }
    }

    pub fn failure(&self) -> &Failure {
        match self {
            ConsoleError::Authentication(failure)
            | ConsoleError::Upload(failure)
            | ConsoleError::Install(failure)
            | ConsoleError::Backup(failure)
            | ConsoleError::Commit(failure) => failure,
            ConsoleError::RepositoryQuery { failure, .. }
            | ConsoleError::Checkout { failure, .. }
            | ConsoleError::Checkin { failure, .. }
            | ConsoleError::Deletion { failure, .. } => failure,
        }
    }

    /// Whether the step failed because the server could not be reached.
    pub fn is_network(&self) -> bool {
        matches!(self.failure(), Failure::Network(_))
    }

    /// The node the failed call targeted, for per-node steps.
    pub fn path(&self) -> Option<&RepositoryPath> {
        match self {
            ConsoleError::RepositoryQuery { path, .. }
            | ConsoleError::Checkout { path, .. }
            | ConsoleError::Checkin { path, .. }
            | ConsoleError::Deletion { path, .. } => Some(path),
            _ => None,
        }
    }
}
