// ABOUTME: Diagnostics accumulator for non-fatal warnings during deployment.
// ABOUTME: Collects best-effort failures that shouldn't fail a run but should be shown to users.

use crate::console::{ConsoleError, ConsoleErrorKind};
use crate::types::RepositoryPath;

/// Collects non-fatal warnings during a deployment run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A non-fatal warning collected during deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub path: Option<RepositoryPath>,
    pub message: String,
}

impl Warning {
    /// Create a warning for a node the checkin pass could not handle.
    pub fn checkin(error: &ConsoleError) -> Self {
        let kind = match error.kind() {
            ConsoleErrorKind::RepositoryQuery => WarningKind::NodeQuery,
            _ => WarningKind::Checkin,
        };
        Self {
            kind,
            path: error.path().cloned(),
            message: error.to_string(),
        }
    }
}

/// Categories of warnings that can occur during deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Definition lookup failed during the checkin pass.
    NodeQuery,
    /// Checkin of a versioned node failed.
    Checkin,
}
