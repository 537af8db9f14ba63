// ABOUTME: Exports the currently installed package and stores it locally.
// ABOUTME: Streams the export into `<base>_<yyyyMMdd-HHmm>.zip` under the backup folder.

use chrono::NaiveDateTime;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::endpoints::PACKAGE_SERVICE;
use super::error::{ConsoleError, Failure, FolderProblem};
use super::{Console, Expect};
use crate::http::form::with_query;
use crate::http::{BodyStream, Request, Session, Transport};
use crate::types::{DEFAULT_PACKAGE_ROOT, PackageArtifact};

impl<T: Transport> Console<T> {
    /// Download the server's copy of the package into `folder`.
    ///
    /// Creates `folder` when missing. Returns the path of the written archive.
    pub async fn backup(
        &self,
        session: &Session,
        artifact: &PackageArtifact,
        folder: &Path,
        taken_at: NaiveDateTime,
    ) -> Result<PathBuf, ConsoleError> {
        ensure_backup_folder(folder)
            .await
            .map_err(ConsoleError::Backup)?;

        let target = with_query(
            &self.base.target(PACKAGE_SERVICE),
            &[
                ("cmd", "get"),
                ("_charset_", "utf8"),
                ("name", artifact.base_name()),
            ],
        );
        tracing::info!(
            "backing up {}/{}",
            DEFAULT_PACKAGE_ROOT,
            artifact.file_name()
        );

        let response = self
            .call(Request::get(target).session(session), Expect::Ok)
            .await
            .map_err(ConsoleError::Backup)?;

        let destination = folder.join(artifact.backup_file_name(taken_at));
        let written = copy_to_file(response.into_body(), &destination)
            .await
            .map_err(ConsoleError::Backup)?;

        tracing::info!(
            "Back-up successful ({} bytes). The backup is {}",
            written,
            destination.display()
        );
        Ok(destination)
    }
}

/// Scratch file written once to prove the backup folder accepts writes.
const WRITE_CHECK_FILE: &str = ".crxdeploy-write-check";

/// Create the folder if needed and check it can hold the backup.
async fn ensure_backup_folder(folder: &Path) -> Result<(), Failure> {
    let rejected = |problem: FolderProblem| {
        tracing::error!("Back-up failed. {} {}.", folder.display(), problem);
        Failure::Folder {
            path: folder.to_path_buf(),
            problem,
        }
    };

    if !tokio::fs::try_exists(folder).await.unwrap_or(false) {
        tokio::fs::create_dir_all(folder)
            .await
            .map_err(|_| rejected(FolderProblem::NotCreatable))?;
    }

    let metadata = tokio::fs::metadata(folder)
        .await
        .map_err(|_| rejected(FolderProblem::NotCreatable))?;
    if !metadata.is_dir() {
        return Err(rejected(FolderProblem::NotADirectory));
    }

    let check = folder.join(WRITE_CHECK_FILE);
    tokio::fs::write(&check, b"")
        .await
        .map_err(|_| rejected(FolderProblem::NotWritable))?;
    if let Err(e) = tokio::fs::remove_file(&check).await {
        tracing::warn!("failed to remove {}: {}", check.display(), e);
    }

    Ok(())
}

/// Drain `body` into a new file at `destination`.
///
/// The partial file is removed when the stream or the write fails. Both the
/// stream and the file handle are released on every path.
async fn copy_to_file(mut body: BodyStream, destination: &Path) -> Result<u64, Failure> {
    let mut file = File::create(destination).await.map_err(|e| {
        Failure::io(format!("failed to create {}", destination.display()), e)
    })?;

    let copied: Result<u64, Failure> = async {
        let mut written = 0u64;
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(|e| {
                Failure::io(format!("failed to write {}", destination.display()), e)
            })?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(|e| {
            Failure::io(format!("failed to write {}", destination.display()), e)
        })?;
        Ok(written)
    }
    .await;

    drop(body);
    drop(file);

    if copied.is_err()
        && let Err(e) = tokio::fs::remove_file(destination).await
    {
        tracing::warn!(
            "failed to remove partial backup {}: {}",
            destination.display(),
            e
        );
    }

    copied
}
