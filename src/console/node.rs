// ABOUTME: Type-state model of a repository node's versioning lifecycle.
// ABOUTME: Unknown -> Versioned | Plain; Versioned -> CheckedOut -> CheckedIn.

use std::marker::PhantomData;

use super::Console;
use super::error::ConsoleError;
use crate::http::{Session, Transport};
use crate::types::RepositoryPath;

/// Not yet queried.
/// Available actions: `classify()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Unknown;

/// The server reports the `mix:versionable` mixin.
/// Available actions: `checkout()`, `checkin()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Versioned;

/// Not under version control.
/// Available actions: `delete()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

/// Checked out for modification.
/// Available actions: `delete()`, `checkin()`
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedOut;

/// Checked back in. Terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedIn;

/// A repository node, parameterized by what is known about it.
///
/// The state is derived fresh from the server on every run and is never
/// cached across calls.
#[derive(Debug, Clone)]
pub struct Node<S> {
    path: RepositoryPath,
    _state: PhantomData<S>,
}

/// Outcome of querying a node's definition.
#[derive(Debug)]
pub enum Classified {
    Versioned(Node<Versioned>),
    Plain(Node<Plain>),
}

impl<S> Node<S> {
    pub fn path(&self) -> &RepositoryPath {
        &self.path
    }

    pub fn into_path(self) -> RepositoryPath {
        self.path
    }

    fn transition<U>(self) -> Node<U> {
        Node {
            path: self.path,
            _state: PhantomData,
        }
    }
}

impl Node<Unknown> {
    pub fn new(path: RepositoryPath) -> Self {
        Node {
            path,
            _state: PhantomData,
        }
    }

    /// Query the node definition to learn whether it is versioned.
    pub async fn classify<T: Transport>(
        self,
        console: &Console<T>,
        session: &Session,
    ) -> Result<Classified, ConsoleError> {
        if console.is_versioned(session, &self.path).await? {
            tracing::info!("Node at : {} is mix:versionable.", self.path);
            Ok(Classified::Versioned(self.transition()))
        } else {
            Ok(Classified::Plain(self.transition()))
        }
    }
}

impl Node<Versioned> {
    pub async fn checkout<T: Transport>(
        self,
        console: &Console<T>,
        session: &Session,
    ) -> Result<Node<CheckedOut>, ConsoleError> {
        console.checkout(session, &self.path).await?;
        Ok(self.transition())
    }

    /// Check in a node a previous run step left checked out.
    pub async fn checkin<T: Transport>(
        self,
        console: &Console<T>,
        session: &Session,
    ) -> Result<Node<CheckedIn>, ConsoleError> {
        console.checkin(session, &self.path).await?;
        Ok(self.transition())
    }
}

impl Node<CheckedOut> {
    pub async fn delete<T: Transport>(
        self,
        console: &Console<T>,
        session: &Session,
    ) -> Result<RepositoryPath, ConsoleError> {
        console.delete_recursive(session, &self.path).await?;
        Ok(self.path)
    }

    pub async fn checkin<T: Transport>(
        self,
        console: &Console<T>,
        session: &Session,
    ) -> Result<Node<CheckedIn>, ConsoleError> {
        console.checkin(session, &self.path).await?;
        Ok(self.transition())
    }
}

impl Node<Plain> {
    pub async fn delete<T: Transport>(
        self,
        console: &Console<T>,
        session: &Session,
    ) -> Result<RepositoryPath, ConsoleError> {
        console.delete_recursive(session, &self.path).await?;
        Ok(self.path)
    }
}
