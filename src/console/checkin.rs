// ABOUTME: Best-effort checkin pass over the configured repository paths.
// ABOUTME: Per-path failures become warnings; remaining paths are still attempted.

use super::Console;
use super::node::{Classified, Node};
use crate::diagnostics::{Diagnostics, Warning};
use crate::http::{Session, Transport};
use crate::types::{DeletePaths, RepositoryPath};

impl<T: Transport> Console<T> {
    /// Check in every versioned node among `paths`, in input order.
    ///
    /// Paths listed in `deleted` no longer exist on the server and are not
    /// visited. Returns the paths that were checked in. Failures are
    /// recorded in `diag` and never stop the pass.
    pub async fn checkin_all(
        &self,
        session: &Session,
        paths: &DeletePaths,
        deleted: &[RepositoryPath],
        diag: &mut Diagnostics,
    ) -> Vec<RepositoryPath> {
        let mut checked_in = Vec::new();

        for path in paths.iter().filter(|p| !deleted.contains(*p)) {
            let result = match Node::new(path.clone()).classify(self, session).await {
                Ok(Classified::Versioned(node)) => node
                    .checkin(self, session)
                    .await
                    .map(|node| Some(node.into_path())),
                Ok(Classified::Plain(_)) => Ok(None),
                Err(e) => Err(e),
            };

            match result {
                Ok(Some(path)) => checked_in.push(path),
                Ok(None) => {}
                Err(e) => diag.warn(Warning::checkin(&e)),
            }
        }

        checked_in
    }
}
