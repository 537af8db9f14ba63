// ABOUTME: Repository-wide save of pending changes.
// ABOUTME: Issued after the deletion pass and after the checkin pass.

use super::endpoints::NODE_CONTENT;
use super::error::ConsoleError;
use super::{Console, Expect};
use crate::http::form::with_query;
use crate::http::{Request, Session, Transport};
use crate::types::RepositoryPath;

impl<T: Transport> Console<T> {
    /// Persist all pending transient changes.
    pub async fn save_all(&self, session: &Session) -> Result<(), ConsoleError> {
        let root = RepositoryPath::root();
        let target = with_query(
            &self.base.target(NODE_CONTENT),
            &[("Path", root.as_str()), ("action_ops", "saveAll")],
        );
        tracing::info!("save all changes");

        self.call(Request::get(target).session(session), Expect::Ok)
            .await
            .map_err(ConsoleError::Commit)?;
        tracing::info!("All changes saved");
        Ok(())
    }
}
