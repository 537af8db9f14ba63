// ABOUTME: Fail-fast deletion of the configured repository paths.
// ABOUTME: Versioned nodes are checked out; plain nodes are deleted recursively.

use serde::Deserialize;

use super::Console;
use super::error::ConsoleError;
use super::node::{Classified, Node};
use crate::http::{Session, Transport};
use crate::types::{DeletePaths, RepositoryPath};

/// What the deletion step does with a version-controlled node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionedNodePolicy {
    /// Check the node out and leave it in place.
    #[default]
    CheckoutOnly,
    /// Check the node out, then delete it.
    Delete,
}

/// Nodes touched by one deletion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    pub deleted: Vec<RepositoryPath>,
    pub checked_out: Vec<RepositoryPath>,
}

impl<T: Transport> Console<T> {
    /// Delete every path in input order.
    ///
    /// Each node's versioning state is queried before anything else is done
    /// to it. The first failing path aborts the pass; later paths are not
    /// attempted.
    pub async fn delete_all(
        &self,
        session: &Session,
        paths: &DeletePaths,
        policy: VersionedNodePolicy,
    ) -> Result<DeletionSummary, ConsoleError> {
        let mut summary = DeletionSummary::default();

        for path in paths.iter() {
            match Node::new(path.clone()).classify(self, session).await? {
                Classified::Versioned(node) => {
                    let node = node.checkout(self, session).await?;
                    summary.checked_out.push(path.clone());

                    if policy == VersionedNodePolicy::Delete {
                        summary.deleted.push(node.delete(self, session).await?);
                    }
                }
                Classified::Plain(node) => {
                    summary.deleted.push(node.delete(self, session).await?);
                }
            }
        }

        Ok(summary)
    }
}
