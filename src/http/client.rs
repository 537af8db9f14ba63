// ABOUTME: reqwest-based HTTP transport to the console server.
// ABOUTME: Never follows redirects and bounds connection setup with a connect timeout.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::multipart;
use reqwest::redirect;
use snafu::ResultExt;
use std::time::Duration;

use super::base_url::BaseUrl;
use super::error::{ClientSnafu, HttpError};
use super::session::Cookie;
use super::transport::{Request, RequestBody, Response, Transport};

/// Connect timeout used when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP(S) transport built on a shared `reqwest::Client`.
///
/// The client keeps no cookie store of its own; cookies travel in the
/// request's session header and come back in `Response::cookies`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    origin: String,
}

impl HttpTransport {
    pub fn new(base: &BaseUrl, connect_timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .connect_timeout(connect_timeout)
            .build()
            .context(ClientSnafu)?;

        Ok(Self {
            client,
            origin: base.origin(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let Request {
            method,
            target,
            cookie,
            body,
        } = request;

        let mut builder = self
            .client
            .request(method, format!("{}{}", self.origin, target));
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Form(form) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(form),
            RequestBody::File {
                field,
                file_name,
                content,
            } => {
                let part = multipart::Part::bytes(content.to_vec()).file_name(file_name);
                builder.multipart(multipart::Form::new().part(field, part))
            }
        };

        let resp = builder
            .send()
            .await
            .map_err(|e| HttpError::from_request(target, e))?;

        let status = resp.status();
        let cookies = resp.cookies().map(|c| Cookie::from(&c)).collect();
        tracing::debug!("{} from console", status);

        let body = resp
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| HttpError::Body { source: Box::new(e) }))
            .boxed();

        Ok(Response::new(status, cookies, body))
    }
}
