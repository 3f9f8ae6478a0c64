//! The banner/logout exchange.

use std::time::{Duration, Instant};

use tokio::io::{
    AsyncBufRead, AsyncBufReadExt as _, AsyncRead, AsyncWrite, AsyncWriteExt as _, BufReader,
};

use crate::{AttemptError, Stage};

/// The start of the greeting sent by the server.
pub const BANNER_PREFIX: &str = "* OK ";

/// The `LOGOUT` command sent to close the session.
pub const LOGOUT_REQUEST: &str = "ONMSPOLLER LOGOUT\r\n";

/// The start of the untagged `BYE` sent in response to `LOGOUT`.
pub const BYE_PREFIX: &str = "* BYE ";

/// The start of the tagged completion of `LOGOUT`.
pub const LOGOUT_OK_PREFIX: &str = "ONMSPOLLER OK ";

/// Longest line we are willing to buffer, terminator excluded.
const MAX_LINE_LEN: usize = 8 * 1024;

/// What was wrong with a line of the exchange.
#[derive(Debug, thiserror::Error)]
pub enum Mismatch {
    /// The stream ended before the line arrived.
    #[error("stream closed while expecting {expected:?}")]
    Missing {
        /// Expected line prefix.
        expected: &'static str,
    },

    /// The line did not start with the expected prefix.
    #[error("expected {expected:?}, got {line:?}")]
    Unexpected {
        /// Expected line prefix.
        expected: &'static str,

        /// The received line, lossily decoded and without the terminator.
        line: String,
    },

    /// The line was not terminated within the line length limit.
    #[error("line too long while expecting {expected:?}")]
    TooLong {
        /// Expected line prefix.
        expected: &'static str,
    },
}

/// Run the exchange over a connected stream.
///
/// Returns the elapsed time since `started` at the moment the banner was
/// confirmed.
pub(crate) async fn exchange<S>(
    stream: &mut S,
    started: Instant,
    timeout: Duration,
) -> Result<Duration, AttemptError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut reader = Lines::new(BufReader::new(stream));

    let banner = reader.read_line(Stage::Banner, timeout).await?;
    if let Line::Complete(ref banner) = banner {
        tracing::debug!(banner = %String::from_utf8_lossy(banner), "received banner");
    }
    expect(banner, Stage::Banner, BANNER_PREFIX)?;

    let response_time = started.elapsed();

    let stream = reader.inner.get_mut();
    tokio::time::timeout(timeout, async {
        stream.write_all(LOGOUT_REQUEST.as_bytes()).await?;
        stream.flush().await
    })
    .await
    .map_err(|_| AttemptError::Timeout {
        stage: Stage::Logout,
        timeout,
    })?
    .map_err(|error| AttemptError::from_io(Stage::Logout, error))?;

    let bye = reader.read_line(Stage::Bye, timeout).await?;
    expect(bye, Stage::Bye, BYE_PREFIX)?;

    let logout = reader.read_line(Stage::LogoutResponse, timeout).await?;
    expect(logout, Stage::LogoutResponse, LOGOUT_OK_PREFIX)?;

    Ok(response_time)
}

/// A single read line.
enum Line {
    /// End of stream before any byte.
    Eof,

    /// A line without its terminator, possibly unterminated if the stream
    /// ended after it.
    Complete(Vec<u8>),

    /// No terminator within [`MAX_LINE_LEN`] bytes.
    TooLong,
}

/// Line splitter accepting `\n`, `\r\n` and a lone `\r` as terminators.
struct Lines<R> {
    /// The buffered stream.
    inner: R,

    /// The previous line ended with `\r`, so a leading `\n` belongs to it.
    skip_lf: bool,
}

impl<R> Lines<R>
where
    R: AsyncBufRead + Unpin,
{
    /// Wrap a buffered stream.
    const fn new(inner: R) -> Self {
        Self {
            inner,
            skip_lf: false,
        }
    }

    /// Read one line within the timeout.
    async fn read_line(&mut self, stage: Stage, timeout: Duration) -> Result<Line, AttemptError> {
        tokio::time::timeout(timeout, self.next_line())
            .await
            .map_err(|_| AttemptError::Timeout { stage, timeout })?
            .map_err(|error| AttemptError::from_io(stage, error))
    }

    /// Read up to the next terminator or the end of the stream.
    async fn next_line(&mut self) -> std::io::Result<Line> {
        let mut line = Vec::new();

        loop {
            let (consumed, done) = {
                let available = self.inner.fill_buf().await?;
                if available.is_empty() {
                    return Ok(if line.is_empty() {
                        Line::Eof
                    } else {
                        Line::Complete(line)
                    });
                }

                let skipped = usize::from(self.skip_lf && available[0] == b'\n');
                self.skip_lf = false;

                let rest = &available[skipped..];
                match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(end) => {
                        line.extend_from_slice(&rest[..end]);
                        self.skip_lf = rest[end] == b'\r';
                        (skipped + end + 1, true)
                    }
                    None => {
                        line.extend_from_slice(rest);
                        (available.len(), false)
                    }
                }
            };
            self.inner.consume(consumed);

            if line.len() > MAX_LINE_LEN {
                return Ok(Line::TooLong);
            }
            if done {
                return Ok(Line::Complete(line));
            }
        }
    }
}

/// Check the line against the expected prefix.
fn expect(line: Line, stage: Stage, expected: &'static str) -> Result<(), AttemptError> {
    let mismatch = match line {
        Line::Complete(line) if line.starts_with(expected.as_bytes()) => return Ok(()),
        Line::Complete(line) => Mismatch::Unexpected {
            expected,
            line: String::from_utf8_lossy(&line).into_owned(),
        },
        Line::Eof => Mismatch::Missing { expected },
        Line::TooLong => Mismatch::TooLong { expected },
    };

    Err(AttemptError::ProtocolMismatch { stage, mismatch })
}
