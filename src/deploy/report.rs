// ABOUTME: Summary of a finished deployment run.
// ABOUTME: Records how far the run went and the nodes it touched.

use std::fmt;
use std::path::PathBuf;

use crate::diagnostics::Warning;
use crate::types::RepositoryPath;

/// Where a successful run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `skip` was set; nothing was contacted.
    Skipped,
    /// Stopped after the backup step.
    BackupOnly,
    /// Stopped after deletion; no upload or install.
    InstallSkipped,
    /// Package installed from `install_path`.
    Installed { install_path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub outcome: Outcome,
    pub backup: Option<PathBuf>,
    pub deleted: Vec<RepositoryPath>,
    pub checked_out: Vec<RepositoryPath>,
    pub checked_in: Vec<RepositoryPath>,
    pub warnings: Vec<Warning>,
}

impl DeployReport {
    pub(crate) fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            backup: None,
            deleted: Vec::new(),
            checked_out: Vec::new(),
            checked_in: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn installed(&self) -> bool {
        matches!(self.outcome, Outcome::Installed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Skipped => f.write_str("deployment skipped"),
            Outcome::BackupOnly => f.write_str("backup complete, install not requested"),
            Outcome::InstallSkipped => f.write_str("install skipped"),
            Outcome::Installed { install_path } => write!(f, "installed {install_path}"),
        }
    }
}
