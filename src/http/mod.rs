// ABOUTME: HTTP session client for the console: transport, cookies, and encoding.
// ABOUTME: Every call after login carries the session's cookie set.

mod base_url;
mod client;
mod error;
pub mod form;
mod session;
mod transport;

pub use base_url::{BaseUrl, BaseUrlError};
pub use client::{DEFAULT_CONNECT_TIMEOUT, HttpTransport};
pub use error::{BoxError, HttpError, HttpErrorKind};
pub use session::{Cookie, Session};
pub use transport::{BodyStream, Request, RequestBody, Response, Transport};
