// ABOUTME: Best-effort removal of `.vlt` metadata files from a directory tree.
// ABOUTME: Independent of the deployment workflow; failures are collected, never fatal.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const VLT_SUFFIX: &str = ".vlt";

/// What a sweep removed and what it could not.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, io::Error)>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Recursively delete every file under `dir` whose name ends in `.vlt`.
///
/// Unreadable directories and failed removals are recorded in the report;
/// the walk continues past them.
pub fn sweep_vlt_files(dir: &Path) -> SweepReport {
    let mut report = SweepReport::default();

    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                tracing::warn!("Cannot read {}: {}", path.display(), e);
                report.failed.push((path, io::Error::from(e)));
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_vlt(entry.path()) {
            continue;
        }

        let path = entry.into_path();
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                report.removed.push(path);
            }
            Err(e) => {
                tracing::warn!("Cannot remove {}: {}", path.display(), e);
                report.failed.push((path, e));
            }
        }
    }

    report
}

fn is_vlt(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(VLT_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn removes_vlt_files_recursively() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("jcr_root/apps");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".vlt"), "").unwrap();
        std::fs::write(nested.join("page.vlt"), "").unwrap();
        std::fs::write(nested.join("page.xml"), "").unwrap();

        let report = sweep_vlt_files(dir.path());

        assert!(report.is_clean());
        assert_eq!(report.removed.len(), 2);
        assert!(nested.join("page.xml").exists());
        assert!(!nested.join("page.vlt").exists());
    }

    #[test]
    fn missing_directory_is_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let report = sweep_vlt_files(&dir.path().join("absent"));
        assert!(report.removed.is_empty());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].1.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_does_not_stop_the_sweep() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::write(locked.join("hidden.vlt"), "").unwrap();
        std::fs::write(dir.path().join("top.vlt"), "").unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        let readable = std::fs::read_dir(&locked).is_ok();

        let report = sweep_vlt_files(dir.path());
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(report.removed.contains(&dir.path().join("top.vlt")));
        if !readable {
            assert_eq!(report.failed.len(), 1);
            assert_eq!(report.failed[0].0, locked);
        }
    }
}
