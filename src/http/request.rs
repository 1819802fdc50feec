use std::fmt;

use crate::cli::url::Target;

const HTTP_VERSION: &str = "HTTP/1.0";

/// HTTP request methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Why a request could not be assembled.
#[derive(Debug, PartialEq, Eq)]
pub enum BuildError {
    /// POST was requested without inline data or a file body.
    MissingBody,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingBody => {
                write!(f, "post needs a body: use -d for inline data or -f for a file")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// A fully assembled HTTP/1.0 request, ready for serialization.
///
/// Headers are an ordered list: they appear on the wire exactly in the
/// order they were supplied.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// As it appears in the `Host` header (port included when not 80).
    pub host: String,
    pub path: String,
    /// Without the leading `?`; empty when there is no query string.
    pub query: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for `Request`.
///
/// # Example
///
/// ```
/// # use httpc::cli::url::Target;
/// # use httpc::http::request::{Method, RequestBuilder};
/// let target = Target {
///     host: "example.com".to_string(),
///     port: 80,
///     path: "/x".to_string(),
///     query: String::new(),
/// };
/// let request = RequestBuilder::new(Method::Get, &target)
///     .header("User-Agent", "httpc")
///     .build()
///     .unwrap();
/// assert!(request.to_bytes().starts_with(b"GET /x HTTP/1.0\r\n"));
/// ```
pub struct RequestBuilder {
    method: Method,
    host: String,
    path: String,
    query: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new(method: Method, target: &Target) -> Self {
        Self {
            method,
            host: target.host_header(),
            path: target.path.clone(),
            query: target.query.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Assemble the request.
    ///
    /// POST requires a body source. Its `Content-Length` and `Content-Type`
    /// are computed from the body and appended after the caller's headers;
    /// a caller-supplied header of the same name is left in place, so both
    /// go on the wire and the receiving end's last-header-wins rule decides.
    pub fn build(self) -> Result<Request, BuildError> {
        let mut headers = self.headers;

        let body = match self.method {
            Method::Get => Vec::new(),
            Method::Post => {
                let body = self.body.ok_or(BuildError::MissingBody)?;
                headers.push(("Content-Length".to_string(), body.len().to_string()));
                headers.push(("Content-Type".to_string(), content_type_for(&body).to_string()));
                body
            }
        };

        Ok(Request {
            method: self.method,
            host: self.host,
            path: self.path,
            query: self.query,
            headers,
            body,
        })
    }
}

impl Request {
    /// Serialize to wire bytes: request line, `Host`, headers in order, a
    /// blank line, then the body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        // Request line; the query suffix is omitted entirely when empty.
        let request_line = if self.query.is_empty() {
            format!("{} {} {}\r\n", self.method.as_str(), self.path, HTTP_VERSION)
        } else {
            format!("{} {}?{} {}\r\n", self.method.as_str(), self.path, self.query, HTTP_VERSION)
        };
        buf.extend_from_slice(request_line.as_bytes());

        buf.extend_from_slice(format!("Host: {}\r\n", self.host).as_bytes());

        for (name, value) in &self.headers {
            buf.extend_from_slice(name.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(value.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }

        // Header/body separator
        buf.extend_from_slice(b"\r\n");

        buf.extend_from_slice(&self.body);

        buf
    }
}

/// Label a POST body: syntactically valid JSON is `application/json`,
/// anything else is treated as a form payload.
pub fn content_type_for(body: &[u8]) -> &'static str {
    let is_json = std::str::from_utf8(body)
        .ok()
        .is_some_and(|text| serde_json::from_str::<serde_json::Value>(text).is_ok());

    if is_json {
        "application/json"
    } else {
        "application/x-www-form-urlencoded"
    }
}
