// ABOUTME: Test support utilities.
// ABOUTME: Provides a scripted console transport, config builders, and tracing setup.

use async_trait::async_trait;
use bytes::Bytes;
use crxdeploy::config::Config;
use crxdeploy::console::Credentials;
use crxdeploy::http::{Cookie, HttpError, Request, RequestBody, Response, Transport};
use futures::{StreamExt, stream};
use parking_lot::Mutex;
use reqwest::{Method, StatusCode};
use std::path::Path;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("crxdeploy=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Canned answer for a matched request.
#[derive(Debug, Clone)]
pub enum Reply {
    Status {
        status: StatusCode,
        cookies: Vec<Cookie>,
        body: String,
    },
    /// 200 whose body stream fails after delivering `partial`.
    Truncated { partial: String },
    /// Connection refused.
    Refused,
}

#[allow(dead_code)]
impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::status(StatusCode::OK, body)
    }

    pub fn redirect() -> Self {
        Reply::status(StatusCode::FOUND, "")
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Reply::Status {
            status,
            cookies: Vec::new(),
            body: body.to_string(),
        }
    }

    pub fn with_cookie(self, name: &str, value: &str) -> Self {
        match self {
            Reply::Status {
                status,
                mut cookies,
                body,
            } => {
                cookies.push(Cookie::new(name, value));
                Reply::Status {
                    status,
                    cookies,
                    body,
                }
            }
            other => other,
        }
    }
}

struct Rule {
    method: Method,
    target: String,
    form: Option<String>,
    reply: Reply,
}

impl Rule {
    fn matches(&self, request: &Request) -> bool {
        request.method == self.method
            && request.target.contains(&self.target)
            && match (&self.form, &request.body) {
                (None, _) => true,
                (Some(fragment), RequestBody::Form(body)) => body.contains(fragment.as_str()),
                (Some(_), _) => false,
            }
    }
}

/// A request as the transport saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub target: String,
    pub cookie: Option<String>,
    pub body: RequestBody,
}

#[allow(dead_code)]
impl Recorded {
    pub fn form(&self) -> &str {
        match &self.body {
            RequestBody::Form(body) => body,
            _ => "",
        }
    }

    /// `METHOD target` plus the form body for POSTs, for order assertions.
    pub fn line(&self) -> String {
        match &self.body {
            RequestBody::Form(body) => format!("{} {} {}", self.method, self.target, body),
            _ => format!("{} {}", self.method, self.target),
        }
    }
}

/// Transport answering from a list of rules.
///
/// The most recently added matching rule wins. Unmatched requests get a 404
/// with an empty body.
#[derive(Default)]
pub struct ScriptedTransport {
    rules: Mutex<Vec<Rule>>,
    log: Mutex<Vec<Recorded>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for a console where every step succeeds and no node is versioned.
    pub fn happy_console() -> Self {
        Self::new()
            .on(Method::GET, "/login.jsp", Reply::ok("<form/>").with_cookie("JSESSIONID", "abc"))
            .on(Method::POST, "/login.jsp", Reply::redirect().with_cookie("login-token", "t1"))
            .on(Method::GET, "/browser/definition.jsp", Reply::ok("<td>nt:folder</td>"))
            .on(Method::GET, "/browser/delete_recursive.jsp", Reply::ok("deleted"))
            .on(Method::POST, "/browser/content.jsp", Reply::ok("done"))
            .on(Method::GET, "/browser/content.jsp?Path=/&action_ops=saveAll", Reply::ok("saved"))
            .on(Method::POST, "/packmgr/list.jsp", Reply::redirect())
            .on(
                Method::GET,
                "/packmgr/unpack.jsp",
                Reply::ok("<pre>Package installed in 1200ms.</pre>"),
            )
            .on(Method::GET, "/packmgr/service.jsp", Reply::ok("PK-archive-bytes"))
    }

    pub fn on(self, method: Method, target: &str, reply: Reply) -> Self {
        self.rules.lock().push(Rule {
            method,
            target: target.to_string(),
            form: None,
            reply,
        });
        self
    }

    /// Like [`on`](Self::on), additionally requiring the form body to contain `form`.
    pub fn on_form(self, method: Method, target: &str, form: &str, reply: Reply) -> Self {
        self.rules.lock().push(Rule {
            method,
            target: target.to_string(),
            form: Some(form.to_string()),
            reply,
        });
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.requests().iter().map(Recorded::line).collect()
    }

    pub fn count(&self, fragment: &str) -> usize {
        self.lines().iter().filter(|l| l.contains(fragment)).count()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> Result<Response, HttpError> {
        let reply = self
            .rules
            .lock()
            .iter()
            .rev()
            .find(|rule| rule.matches(&request))
            .map(|rule| rule.reply.clone());

        self.log.lock().push(Recorded {
            method: request.method.clone(),
            target: request.target.clone(),
            cookie: request.cookie.clone(),
            body: request.body.clone(),
        });

        match reply {
            Some(Reply::Status {
                status,
                cookies,
                body,
            }) => Ok(Response::from_bytes(status, cookies, body)),
            Some(Reply::Truncated { partial }) => {
                let chunks = stream::iter([
                    Ok(Bytes::from(partial)),
                    Err(HttpError::Body {
                        source: Box::new(std::io::Error::from(std::io::ErrorKind::ConnectionReset)),
                    }),
                ]);
                Ok(Response::new(StatusCode::OK, Vec::new(), chunks.boxed()))
            }
            Some(Reply::Refused) => Err(HttpError::Connect {
                target: request.target.clone(),
                source: Box::new(std::io::Error::from(std::io::ErrorKind::ConnectionRefused)),
            }),
            None => Ok(Response::from_bytes(StatusCode::NOT_FOUND, Vec::new(), "")),
        }
    }
}

/// Minimal config pointing at a package file inside `dir`, with extra YAML appended.
#[allow(dead_code)]
pub fn config_in(dir: &Path, extra: &str) -> Config {
    let package = dir.join("app.zip");
    std::fs::write(&package, b"PK\x03\x04package").unwrap();
    let yaml = format!(
        "server: http://localhost:4502/crx\nlogin: admin\npassword: admin\npackage: {}\n{}",
        package.display(),
        extra
    );
    Config::from_yaml(&yaml).unwrap()
}

#[allow(dead_code)]
pub fn credentials() -> Credentials {
    Credentials::new("crx.default", "admin", "admin")
}
