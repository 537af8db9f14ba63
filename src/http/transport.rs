// ABOUTME: Transport trait and request/response types for console calls.
// ABOUTME: Decouples the console client from the concrete HTTP implementation.

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt, stream};
use reqwest::{Method, StatusCode};
use std::fmt;
use std::pin::Pin;

use super::error::HttpError;
use super::session::{Cookie, Session};

/// Streaming response body.
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// Sends one request and returns the server's response.
///
/// Implementations must not follow redirects: redirect status codes are a
/// success signal for several console endpoints.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, HttpError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        (**self).send(request).await
    }
}

/// Request body variants used by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// `application/x-www-form-urlencoded` payload.
    Form(String),
    /// Single file part of a `multipart/form-data` payload.
    File {
        field: String,
        file_name: String,
        content: Bytes,
    },
}

impl RequestBody {
    pub fn content_type(&self) -> Option<String> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Form(_) => Some("application/x-www-form-urlencoded".to_string()),
            RequestBody::File { .. } => Some("multipart/form-data".to_string()),
        }
    }

    /// Raw payload; for a file part this is the file content alone.
    pub fn into_bytes(self) -> Bytes {
        match self {
            RequestBody::Empty => Bytes::new(),
            RequestBody::Form(form) => Bytes::from(form),
            RequestBody::File { content, .. } => content,
        }
    }
}

/// A request in origin form (path and query relative to the server).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub target: String,
    pub cookie: Option<String>,
    pub body: RequestBody,
}

impl Request {
    pub fn get(target: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            target: target.into(),
            cookie: None,
            body: RequestBody::Empty,
        }
    }

    pub fn post(target: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: Method::POST,
            target: target.into(),
            cookie: None,
            body,
        }
    }

    /// Attach the session's cookies.
    pub fn session(mut self, session: &Session) -> Self {
        self.cookie = session.cookie_header();
        self
    }
}

/// Response status, received cookies, and a streaming body.
pub struct Response {
    pub status: StatusCode,
    pub cookies: Vec<Cookie>,
    body: BodyStream,
}

impl Response {
    pub fn new(status: StatusCode, cookies: Vec<Cookie>, body: BodyStream) -> Self {
        Self {
            status,
            cookies,
            body,
        }
    }

    /// Build a response around an in-memory body.
    pub fn from_bytes(status: StatusCode, cookies: Vec<Cookie>, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self::new(status, cookies, stream::iter([Ok(body)]).boxed())
    }

    /// Whether the status is a redirect (301, 302, 303, 307, 308).
    pub fn is_redirect(&self) -> bool {
        matches!(
            self.status,
            StatusCode::MOVED_PERMANENTLY
                | StatusCode::FOUND
                | StatusCode::SEE_OTHER
                | StatusCode::TEMPORARY_REDIRECT
                | StatusCode::PERMANENT_REDIRECT
        )
    }

    pub fn into_body(self) -> BodyStream {
        self.body
    }

    /// Drain the body into memory.
    pub async fn bytes(self) -> Result<Bytes, HttpError> {
        let mut body = self.body;
        let mut collected = BytesMut::new();
        while let Some(chunk) = body.next().await {
            collected.extend_from_slice(&chunk?);
        }
        Ok(collected.freeze())
    }

    /// Drain the body and decode it as (lossy) UTF-8.
    pub async fn text(self) -> Result<String, HttpError> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("cookies", &self.cookies)
            .finish_non_exhaustive()
    }
}
