use std::fmt;

/// The accumulated response did not contain the header/body delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingError;

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed response: missing header/body delimiter")
    }
}

impl std::error::Error for FramingError {}

/// A raw HTTP response as accumulated from the socket.
///
/// The bytes are whatever arrived before the peer closed the connection;
/// splitting into header block and body happens at presentation time, on
/// the first blank-line delimiter.
#[derive(Debug, Clone)]
pub struct Response {
    text: String,
}

impl Response {
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        Self {
            text: String::from_utf8_lossy(&raw).into_owned(),
        }
    }

    /// The entire response: status line, headers, and body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Split at the first blank-line delimiter.
    pub fn split(&self) -> Result<(&str, &str), FramingError> {
        let at = self.text.find("\r\n\r\n").ok_or(FramingError)?;
        Ok((&self.text[..at], &self.text[at + 4..]))
    }

    /// The header block alone: status line and headers.
    pub fn header_block(&self) -> Result<&str, FramingError> {
        self.split().map(|(headers, _)| headers)
    }

    /// The body alone.
    pub fn body(&self) -> Result<&str, FramingError> {
        self.split().map(|(_, body)| body)
    }

    /// What to print: everything in verbose mode, the body otherwise.
    /// Verbose output never needs the delimiter; body-only output does.
    pub fn render(&self, verbose: bool) -> Result<&str, FramingError> {
        if verbose { Ok(self.text()) } else { self.body() }
    }
}
