// ABOUTME: Client for the repository's HTML/JSP admin console.
// ABOUTME: Authentication, node versioning, deletion, packages, backup, and save-all.

mod auth;
mod backup;
mod browser;
mod checkin;
mod commit;
mod deletion;
pub mod endpoints;
mod error;
mod error_lines;
mod node;
mod packages;

pub use auth::Credentials;
pub use deletion::{DeletionSummary, VersionedNodePolicy};
pub use error::{ConsoleError, ConsoleErrorKind, Failure, FolderProblem};
pub use error_lines::extract_error_message;
pub use node::{CheckedIn, CheckedOut, Classified, Node, Plain, Unknown, Versioned};

use reqwest::StatusCode;

use crate::http::{BaseUrl, Request, Response, Transport};

/// Expected success signal of a console call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expect {
    /// HTTP 200.
    Ok,
    /// Any redirect status.
    Redirect,
}

impl Expect {
    fn matches(self, response: &Response) -> bool {
        match self {
            Expect::Ok => response.status == StatusCode::OK,
            Expect::Redirect => response.is_redirect(),
        }
    }
}

/// Console client over a transport.
///
/// Holds no session state: every operation after login takes the
/// [`Session`](crate::http::Session) explicitly.
#[derive(Debug)]
pub struct Console<T> {
    transport: T,
    base: BaseUrl,
}

impl<T: Transport> Console<T> {
    pub fn new(transport: T, base: BaseUrl) -> Self {
        Self { transport, base }
    }

    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Send a request and check its status against `expect`.
    ///
    /// On mismatch the body is scraped for diagnostics and the connection
    /// released before returning.
    pub(crate) async fn call(&self, request: Request, expect: Expect) -> Result<Response, Failure> {
        tracing::debug!("{} {}", request.method, request.target);
        let response = self.transport.send(request).await?;
        tracing::info!("Response status: {}", response.status);

        if expect.matches(&response) {
            Ok(response)
        } else {
            let status = response.status;
            Err(Failure::status(status, diagnose(response).await))
        }
    }
}

/// Drain a response and scrape its diagnostics. Never fails.
pub(crate) async fn diagnose(response: Response) -> String {
    match response.text().await {
        Ok(body) => diagnose_body(&body),
        Err(e) => {
            tracing::debug!("failed to read response body: {}", e);
            String::new()
        }
    }
}

pub(crate) fn diagnose_body(body: &str) -> String {
    tracing::debug!("Response body: {}", body);
    let message = extract_error_message(body);
    if !message.is_empty() {
        tracing::error!("{}", message);
    }
    message
}
