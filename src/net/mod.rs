//! TCP transport: one connection per request, response framed by close.

use std::fmt;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::Config;

/// Fixed read chunk size for the response loop.
const RECV_BUFFER: usize = 4096;

#[derive(Debug)]
pub enum TransportError {
    /// Connect or read did not complete within the configured window.
    Timeout,
    Io(std::io::Error),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "Connection timed out"),
            TransportError::Io(e) => write!(f, "connection error: {e}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Timeout => None,
            TransportError::Io(e) => Some(e),
        }
    }
}

/// Send `request` to `host:port` and accumulate the response until the
/// peer closes the connection — the sole framing mechanism, since the
/// client does no `Content-Length` bookkeeping of its own. The socket
/// lives exactly as long as this call; there are no retries.
pub async fn send(
    host: &str,
    port: u16,
    request: &[u8],
    cfg: &Config,
) -> Result<Vec<u8>, TransportError> {
    let addr = format!("{host}:{port}");

    tracing::debug!(%addr, "Connecting");
    let mut stream = timeout(cfg.connect_timeout(), TcpStream::connect(&addr))
        .await
        .map_err(|_| TransportError::Timeout)?
        .map_err(TransportError::Io)?;

    stream.write_all(request).await.map_err(TransportError::Io)?;
    stream.flush().await.map_err(TransportError::Io)?;
    tracing::debug!(bytes = request.len(), "Request sent");

    let mut response = BytesMut::with_capacity(RECV_BUFFER);
    let mut chunk = [0u8; RECV_BUFFER];
    loop {
        let n = timeout(cfg.read_timeout(), stream.read(&mut chunk))
            .await
            .map_err(|_| TransportError::Timeout)?
            .map_err(TransportError::Io)?;

        if n == 0 {
            break;
        }
        response.extend_from_slice(&chunk[..n]);
    }

    tracing::debug!(bytes = response.len(), "Response complete");
    Ok(response.to_vec())
}
