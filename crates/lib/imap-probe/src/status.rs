//! Poll status.

use std::time::Duration;

/// Result of a poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The service completed the handshake.
    Available {
        /// Time from the start of the attempt to a valid banner.
        response_time: Duration,
    },

    /// The service could not be confirmed.
    Unavailable {
        /// Why the last attempt failed, if any attempt was made.
        reason: Option<String>,
    },

    /// Connected, but the protocol is not confirmed yet.
    ///
    /// Only observed while an attempt is in flight.
    Unresponsive,
}

impl Status {
    /// Whether the service is available.
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The response time, if available.
    pub const fn response_time(&self) -> Option<Duration> {
        match self {
            Self::Available { response_time } => Some(*response_time),
            Self::Unavailable { .. } | Self::Unresponsive => None,
        }
    }

    /// Why the service is unavailable, if known.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Unavailable { reason } => reason.as_deref(),
            Self::Available { .. } | Self::Unresponsive => None,
        }
    }
}
