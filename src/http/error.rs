// ABOUTME: Transport error types with SNAFU pattern.
// ABOUTME: Classifies connection, timeout, and protocol failures for programmatic handling.

use snafu::Snafu;

/// Underlying cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to exchange a request/response with the console.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum HttpError {
    #[snafu(display("failed to build HTTP client: {source}"))]
    Client { source: reqwest::Error },

    #[snafu(display("request to {target} timed out: {source}"))]
    Timeout { target: String, source: BoxError },

    #[snafu(display("connection for {target} failed: {source}"))]
    Connect { target: String, source: BoxError },

    #[snafu(display("request to {target} failed: {source}"))]
    Send { target: String, source: BoxError },

    #[snafu(display("failed to read response body: {source}"))]
    Body { source: BoxError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    /// The request did not complete within the connect timeout.
    Timeout,
    /// The server could not be reached.
    Connection,
    /// The server was reached but the exchange failed.
    Protocol,
}

impl HttpError {
    /// Sort a reqwest failure for `target` into timeout, connection, or protocol.
    pub fn from_request(target: impl Into<String>, source: reqwest::Error) -> Self {
        let target = target.into();
        if source.is_timeout() {
            HttpError::Timeout {
                target,
                source: Box::new(source),
            }
        } else if source.is_connect() {
            HttpError::Connect {
                target,
                source: Box::new(source),
            }
        } else {
            HttpError::Send {
                target,
                source: Box::new(source),
            }
        }
    }

    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> HttpErrorKind {
        match self {
            HttpError::Timeout { .. } => HttpErrorKind::Timeout,
            HttpError::Connect { .. } => HttpErrorKind::Connection,
            HttpError::Client { .. } | HttpError::Send { .. } | HttpError::Body { .. } => {
                HttpErrorKind::Protocol
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.kind() == HttpErrorKind::Timeout
    }
}
