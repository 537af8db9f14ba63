// ABOUTME: Error types for deployment runs.
// ABOUTME: Wraps console failures and adds configuration problems found at run time.

use crate::console::{ConsoleError, ConsoleErrorKind};

/// Errors that abort a deployment run.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// A fail-fast console step failed.
    #[error(transparent)]
    Console(#[from] ConsoleError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Which part of the run produced a [`DeployError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployErrorKind {
    Authentication,
    RepositoryQuery,
    Checkout,
    Checkin,
    Deletion,
    Upload,
    Install,
    Backup,
    Commit,
    Configuration,
}

impl DeployError {
    pub fn kind(&self) -> DeployErrorKind {
        match self {
            DeployError::Configuration(_) => DeployErrorKind::Configuration,
            DeployError::Console(e) => match e.kind() {
                ConsoleErrorKind::Authentication => DeployErrorKind::Authentication,
                ConsoleErrorKind::RepositoryQuery => DeployErrorKind::RepositoryQuery,
                ConsoleErrorKind::Checkout => DeployErrorKind::Checkout,
                ConsoleErrorKind::Checkin => DeployErrorKind::Checkin,
                ConsoleErrorKind::Deletion => DeployErrorKind::Deletion,
                ConsoleErrorKind::Upload => DeployErrorKind::Upload,
                ConsoleErrorKind::Install => DeployErrorKind::Install,
                ConsoleErrorKind::Backup => DeployErrorKind::Backup,
                ConsoleErrorKind::Commit => DeployErrorKind::Commit,
            },
        }
    }

    /// True when the run failed because the server could not be reached.
    pub fn is_network(&self) -> bool {
        matches!(self, DeployError::Console(e) if e.is_network())
    }
}
