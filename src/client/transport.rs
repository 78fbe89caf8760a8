//! Transport abstraction
//!
//! The adapter builds complete requests; a transport only moves bytes. The
//! native build sends through reqwest, the browser build through fetch.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use super::error::ClientResult;

/// HTTP method subset used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A fully built outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the encoded query string
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON body text
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status plus body text
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request, at most once.
///
/// Implementations map their own failure modes onto
/// [`ClientError::Timeout`](super::ClientError::Timeout) and
/// [`ClientError::Network`](super::ClientError::Network); any response that
/// arrives, whatever its status, is returned as `Ok`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse>;
}
