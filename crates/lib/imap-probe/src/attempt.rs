//! A single connect-plus-handshake attempt.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use tokio::io::AsyncWriteExt as _;
use tokio::net::TcpStream;

use crate::{AttemptError, Stage, Status};

/// Run one attempt against `addr`.
///
/// Sets `status` to [`Status::Unresponsive`] once connected. The socket is
/// closed before returning on every path.
pub(crate) async fn run(
    addr: SocketAddr,
    timeout: Duration,
    status: &mut Status,
) -> Result<Duration, AttemptError> {
    let started = Instant::now();

    let mut stream = connect(addr, timeout).await?;
    *status = Status::Unresponsive;

    let result = crate::handshake::exchange(&mut stream, started, timeout).await;

    close(stream).await;

    result
}

/// Open the TCP connection within the timeout.
async fn connect(addr: SocketAddr, timeout: Duration) -> Result<TcpStream, AttemptError> {
    tracing::trace!(imap_address = %addr.ip(), imap_port = addr.port(), "connecting");

    tokio::time::timeout(timeout, TcpStream::connect(addr))
        .await
        .map_err(|_| AttemptError::Timeout {
            stage: Stage::Connect,
            timeout,
        })?
        .map_err(|error| AttemptError::from_io(Stage::Connect, error))
}

/// Shut the stream down and drop it.
async fn close(mut stream: TcpStream) {
    if let Err(error) = stream.shutdown().await {
        tracing::debug!(%error, "error closing socket");
    }
}
