// ABOUTME: Console base URL: scheme, server authority, and the console path prefix.
// ABOUTME: Parsed with reqwest's Url; http and https are supported.

use reqwest::Url;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BaseUrlError {
    #[error("invalid server URL '{0}'")]
    Invalid(String),

    #[error("server URL '{0}' has no host")]
    MissingHost(String),

    #[error("unsupported scheme in '{0}': expected http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    scheme: String,
    host: String,
    port: u16,
    prefix: String,
}

impl BaseUrl {
    /// Parse `http[s]://host[:port][/prefix]`.
    pub fn parse(value: &str) -> Result<Self, BaseUrlError> {
        let url = Url::parse(value.trim()).map_err(|_| BaseUrlError::Invalid(value.to_string()))?;

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(BaseUrlError::UnsupportedScheme(value.to_string()));
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| BaseUrlError::MissingHost(value.to_string()))?
            .to_string();
        let port = url
            .port_or_known_default()
            .ok_or_else(|| BaseUrlError::Invalid(value.to_string()))?;
        let prefix = url.path().trim_end_matches('/').to_string();

        Ok(Self {
            scheme: scheme.to_string(),
            host,
            port,
            prefix,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port` of the console server.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `scheme://host:port`, the part every request URL starts with.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.authority())
    }

    /// Console path prefix without trailing slash (may be empty).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Origin-form target for a console endpoint such as `/login.jsp`.
    pub fn target(&self, endpoint: &str) -> String {
        format!("{}{}", self.prefix, endpoint)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_port_and_prefix() {
        let base = BaseUrl::parse("http://author.local:4502/crx/").unwrap();
        assert_eq!(base.authority(), "author.local:4502");
        assert_eq!(base.prefix(), "/crx");
        assert_eq!(base.target("/login.jsp"), "/crx/login.jsp");
        assert_eq!(base.to_string(), "http://author.local:4502/crx");
    }

    #[test]
    fn defaults_to_scheme_port_and_empty_prefix() {
        let base = BaseUrl::parse("http://localhost").unwrap();
        assert_eq!(base.port(), 80);
        assert_eq!(base.target("/login.jsp"), "/login.jsp");

        let secure = BaseUrl::parse("https://author.example.com/crx").unwrap();
        assert_eq!(secure.port(), 443);
        assert_eq!(secure.origin(), "https://author.example.com:443");
    }

    #[test]
    fn rejects_other_schemes_and_relative_values() {
        assert!(matches!(
            BaseUrl::parse("ftp://localhost:4502/crx"),
            Err(BaseUrlError::UnsupportedScheme(_))
        ));
        assert!(matches!(BaseUrl::parse("crx"), Err(BaseUrlError::Invalid(_))));
    }
}
