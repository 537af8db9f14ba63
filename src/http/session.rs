// ABOUTME: Authenticated cookie set shared by every request after login.
// ABOUTME: Immutable value; new cookies from the server produce a new Session.

use std::fmt;

/// A cookie received through a `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: None,
        }
    }
}

impl From<&reqwest::cookie::Cookie<'_>> for Cookie {
    fn from(cookie: &reqwest::cookie::Cookie<'_>) -> Self {
        Self {
            name: cookie.name().to_string(),
            value: cookie.value().to_string(),
            domain: cookie.domain().map(str::to_string),
            path: cookie.path().map(str::to_string),
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// The cookie set obtained from the login handshake.
///
/// Every cookie is sent on every request regardless of its domain/path
/// attributes. A cookie with the same name as an existing one replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    cookies: Vec<Cookie>,
}

impl Session {
    pub fn new(cookies: impl IntoIterator<Item = Cookie>) -> Self {
        Session::default().merge(cookies)
    }

    /// Returns a new session holding the union of this session's cookies
    /// and `cookies`.
    #[must_use]
    pub fn merge(&self, cookies: impl IntoIterator<Item = Cookie>) -> Session {
        let mut merged = self.cookies.clone();
        for cookie in cookies {
            match merged.iter_mut().find(|c| c.name == cookie.name) {
                Some(existing) => *existing = cookie,
                None => merged.push(cookie),
            }
        }
        Session { cookies: merged }
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// Value for the `Cookie` request header, `None` when empty.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(Cookie::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
