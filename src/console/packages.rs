// ABOUTME: Package upload and installation through the package manager pages.
// ABOUTME: Upload succeeds on redirect; install requires 200 plus a confirmation text.

use super::endpoints::{INSTALL_SUCCESS_MARKER, PACKAGE_LIST, PACKAGE_UNPACK, UPLOAD_FIELD};
use super::error::{ConsoleError, Failure};
use super::{Console, Expect, diagnose_body};
use crate::http::form::{self, with_query};
use crate::http::{Request, Session, Transport};
use crate::types::PackageArtifact;

impl<T: Transport> Console<T> {
    /// Upload the package file as a multipart form.
    pub async fn upload(
        &self,
        session: &Session,
        artifact: &PackageArtifact,
    ) -> Result<(), ConsoleError> {
        let target = self.base.target(PACKAGE_LIST);
        tracing::info!("Uploading {} to {}", artifact, target);

        let content = tokio::fs::read(artifact.path()).await.map_err(|e| {
            ConsoleError::Upload(Failure::io(format!("failed to read {}", artifact), e))
        })?;
        let body = form::file_part(UPLOAD_FIELD, artifact.file_name(), content);

        self.call(Request::post(target, body).session(session), Expect::Redirect)
            .await
            .map_err(ConsoleError::Upload)?;
        tracing::info!("Upload complete");
        Ok(())
    }

    /// Install the uploaded package and return the remote path it was
    /// installed from.
    ///
    /// Unless `acl_ignore` is set, the install overwrites access control
    /// entries from the package.
    pub async fn install(
        &self,
        session: &Session,
        artifact: &PackageArtifact,
        install_root: Option<&str>,
        acl_ignore: bool,
    ) -> Result<String, ConsoleError> {
        let install_path = artifact.install_path(install_root);
        let mut query = vec![("Path", install_path.as_str())];
        if !acl_ignore {
            query.push(("acHandling", "overwrite"));
        }
        let target = with_query(&self.base.target(PACKAGE_UNPACK), &query);
        tracing::info!("installing: {}", target);

        let response = self
            .call(Request::get(target).session(session), Expect::Ok)
            .await
            .map_err(ConsoleError::Install)?;
        let body = response
            .text()
            .await
            .map_err(|e| ConsoleError::Install(e.into()))?;

        if body.is_empty() {
            return Err(ConsoleError::Install(Failure::EmptyBody));
        }
        if !body.contains(INSTALL_SUCCESS_MARKER) {
            return Err(ConsoleError::Install(Failure::MissingMarker {
                diagnostic: diagnose_body(&body),
            }));
        }

        tracing::info!("Install successful");
        Ok(install_path)
    }
}
