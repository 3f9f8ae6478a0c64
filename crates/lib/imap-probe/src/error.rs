//! Error types.

use std::time::Duration;

/// The probe can not run against the given target at all.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The target interface is not an inet address.
    #[error("unsupported interface type \"{kind}\", only inet addresses are supported")]
    UnsupportedInterface {
        /// Name of the interface kind.
        kind: String,
    },
}

/// A step of a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Opening the TCP connection.
    Connect,

    /// Reading the greeting.
    Banner,

    /// Writing the `LOGOUT` command.
    Logout,

    /// Reading the untagged `BYE`.
    Bye,

    /// Reading the tagged `LOGOUT` completion.
    LogoutResponse,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Connect => "connect",
            Self::Banner => "banner read",
            Self::Logout => "logout write",
            Self::Bye => "bye read",
            Self::LogoutResponse => "logout response read",
        })
    }
}

/// Why a single attempt did not confirm the service.
#[derive(Debug, thiserror::Error)]
pub enum AttemptError {
    /// No route to the host or network.
    #[error("no route to host: {0}")]
    Unreachable(#[source] std::io::Error),

    /// The peer refused the connection.
    #[error("connection refused: {0}")]
    Refused(#[source] std::io::Error),

    /// A deadline passed.
    #[error("{stage} did not complete within {timeout:?}")]
    Timeout {
        /// Step that timed out.
        stage: Stage,

        /// The deadline that applied.
        timeout: Duration,
    },

    /// Any other stream error.
    #[error("I/O error during {stage}: {source}")]
    Io {
        /// Step that failed.
        stage: Stage,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The peer did not speak the expected protocol.
    #[error("protocol mismatch at {stage}: {mismatch}")]
    ProtocolMismatch {
        /// Step that failed.
        stage: Stage,

        /// What was wrong with the exchange.
        #[source]
        mismatch: crate::Mismatch,
    },
}

impl AttemptError {
    /// Classify an I/O error raised at the given stage.
    pub fn from_io(stage: Stage, error: std::io::Error) -> Self {
        use std::io::ErrorKind;

        match error.kind() {
            ErrorKind::HostUnreachable | ErrorKind::NetworkUnreachable => Self::Unreachable(error),
            ErrorKind::ConnectionRefused => Self::Refused(error),
            _ => Self::Io {
                stage,
                source: error,
            },
        }
    }

    /// Whether this failure likely points at a persistent, systemic issue.
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}
