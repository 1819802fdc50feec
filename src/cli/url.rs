use std::ops::Range;

use crate::cli::lexer::token_spans;

/// A request target extracted from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    /// Always begins with `/`.
    pub path: String,
    /// Without the leading `?`; empty when the URL had no query string.
    pub query: String,
}

impl Target {
    /// Value for the `Host` header: the port is included when it is not 80.
    pub fn host_header(&self) -> String {
        if self.port == 80 {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Find the first URL-shaped substring in `line`.
///
/// A localhost-recognizing pass runs over the whole line first (`localhost`
/// or `127.0.0.1`, optional scheme prefix, optional `:port`, optional
/// path); only if it finds nothing does the generic `http://...` pass run.
/// Returns the parsed target together with the matched byte range so the
/// caller can excise the URL before flag lexing.
pub fn find(line: &str) -> Option<(Target, Range<usize>)> {
    for (start, tok) in token_spans(line) {
        if let Some(target) = parse_localhost(tok) {
            return Some((target, start..start + tok.len()));
        }
    }

    for (start, tok) in token_spans(line) {
        if let Some(target) = parse_generic(tok) {
            return Some((target, start..start + tok.len()));
        }
    }

    None
}

fn parse_localhost(token: &str) -> Option<Target> {
    let bare = token.strip_prefix("http://").unwrap_or(token);

    let host_len = if bare.starts_with("localhost") {
        "localhost".len()
    } else if bare.starts_with("127.0.0.1") {
        "127.0.0.1".len()
    } else {
        return None;
    };

    // The host must end here: "localhost.example.com" is not a match.
    match bare.as_bytes().get(host_len).copied() {
        None | Some(b':') | Some(b'/') | Some(b'?') => {}
        Some(_) => return None,
    }

    from_url(&format!("http://{bare}"))
}

fn parse_generic(token: &str) -> Option<Target> {
    if !token.starts_with("http://") {
        return None;
    }
    from_url(token)
}

/// Normalize a candidate through `url::Url`; anything without a host is
/// rejected. An explicit port is honored, otherwise 80.
fn from_url(candidate: &str) -> Option<Target> {
    let parsed = url::Url::parse(candidate).ok()?;
    let host = parsed.host_str()?.to_string();

    Some(Target {
        host,
        port: parsed.port().unwrap_or(80),
        path: parsed.path().to_string(),
        query: parsed.query().unwrap_or("").to_string(),
    })
}
