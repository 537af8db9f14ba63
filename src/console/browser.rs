// ABOUTME: Node operations exposed by the console's content browser.
// ABOUTME: Definition lookup, checkout, checkin, and recursive delete of one path.

use super::endpoints::{DELETE_RECURSIVE, NODE_CONTENT, NODE_DEFINITION, VERSIONABLE_MARKER};
use super::error::{ConsoleError, Failure};
use super::{Console, Expect};
use crate::http::form::{self, with_query};
use crate::http::{Request, Session, Transport};
use crate::types::RepositoryPath;

impl<T: Transport> Console<T> {
    /// Whether the node's definition reports the `mix:versionable` mixin.
    pub async fn is_versioned(
        &self,
        session: &Session,
        path: &RepositoryPath,
    ) -> Result<bool, ConsoleError> {
        let query_error = |failure: Failure| ConsoleError::RepositoryQuery {
            path: path.clone(),
            failure,
        };

        let target = with_query(
            &self.base.target(NODE_DEFINITION),
            &[("Path", path.as_str())],
        );
        tracing::info!("Getting definitions for node : {}", path);

        let response = self
            .call(Request::get(target).session(session), Expect::Ok)
            .await
            .map_err(query_error)?;
        tracing::info!("Successfully retrieved node definition.");

        let body = response
            .text()
            .await
            .map_err(|e| query_error(e.into()))?;
        Ok(body.to_lowercase().contains(VERSIONABLE_MARKER))
    }

    /// Check the node out so it can be modified.
    pub async fn checkout(&self, session: &Session, path: &RepositoryPath) -> Result<(), ConsoleError> {
        tracing::info!("Checking out {}", path);
        self.content_action(session, path, "checkout")
            .await
            .map_err(|failure| ConsoleError::Checkout {
                path: path.clone(),
                failure,
            })?;
        tracing::info!("Successfully checked out.");
        Ok(())
    }

    /// Check the node back in.
    pub async fn checkin(&self, session: &Session, path: &RepositoryPath) -> Result<(), ConsoleError> {
        tracing::info!("Checking in {}", path);
        self.content_action(session, path, "checkin")
            .await
            .map_err(|failure| ConsoleError::Checkin {
                path: path.clone(),
                failure,
            })?;
        tracing::info!("Successfully checked in.");
        Ok(())
    }

    /// Delete the node and its subtree.
    ///
    /// Does not look at the node's versioning state; callers go through
    /// [`Node`](super::Node) to get that check.
    pub(crate) async fn delete_recursive(
        &self,
        session: &Session,
        path: &RepositoryPath,
    ) -> Result<(), ConsoleError> {
        let target = with_query(
            &self.base.target(DELETE_RECURSIVE),
            &[("Path", path.as_str()), ("action", "delete")],
        );
        tracing::info!("removing {}", path);

        self.call(Request::get(target).session(session), Expect::Ok)
            .await
            .map_err(|failure| ConsoleError::Deletion {
                path: path.clone(),
                failure,
            })?;
        tracing::info!("Node deleted");
        Ok(())
    }

    async fn content_action(
        &self,
        session: &Session,
        path: &RepositoryPath,
        action: &str,
    ) -> Result<(), Failure> {
        let body = form::form(&[("Path", path.as_str()), ("action_ops", action)]);
        let request = Request::post(self.base.target(NODE_CONTENT), body).session(session);
        self.call(request, Expect::Ok).await?;
        Ok(())
    }
}
