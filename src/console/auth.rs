// ABOUTME: Two-step login handshake against the console.
// ABOUTME: Fetches the login page for initial cookies, then posts credentials.

use std::fmt;

use super::endpoints::LOGIN;
use super::error::ConsoleError;
use super::{Console, Expect};
use crate::http::{Request, Session, Transport, form};

/// Login credentials for one workspace.
#[derive(Clone)]
pub struct Credentials {
    pub workspace: String,
    pub login: String,
    password: String,
}

impl Credentials {
    pub fn new(
        workspace: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            workspace: workspace.into(),
            login: login.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("workspace", &self.workspace)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl<T: Transport> Console<T> {
    /// Log in and return the session cookies.
    ///
    /// The login page must answer 200; that only yields the initial cookie
    /// jar. The credential post must answer with a redirect. The returned
    /// session is the union of the cookies seen in both steps.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session, ConsoleError> {
        let target = self.base.target(LOGIN);
        tracing::info!("login to {}", target);

        let page = self
            .call(Request::get(&target), Expect::Ok)
            .await
            .map_err(ConsoleError::Authentication)?;
        let session = Session::new(page.cookies.clone());
        drop(page);
        tracing::info!("Login page accessed");

        let body = form::form(&[
            ("Workspace", credentials.workspace.as_str()),
            ("UserId", credentials.login.as_str()),
            ("Password", credentials.password.as_str()),
        ]);
        let response = self
            .call(Request::post(&target, body).session(&session), Expect::Redirect)
            .await
            .map_err(ConsoleError::Authentication)?;

        let session = session.merge(response.cookies.clone());
        tracing::info!("Login successful");
        for cookie in session.cookies() {
            tracing::debug!("session cookie {}", cookie.name);
        }

        Ok(session)
    }
}
