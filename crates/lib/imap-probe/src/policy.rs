//! Timeout and retry policy.

use std::time::Duration;

/// Default number of retries.
pub const DEFAULT_RETRIES: u32 = 0;

/// Default connect and read timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// How many times to try and how long to wait for each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    /// Retries after the first attempt.
    pub retries: u32,

    /// Deadline for the connect and for every read.
    pub timeout: Duration,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Policy {
    /// Build the policy from the `retries` and `timeout` parameters.
    pub fn from_parameters(parameters: &crate::Parameters) -> Self {
        let retries = parameters.keyed(crate::keys::RETRIES, DEFAULT_RETRIES);
        let timeout_ms = parameters.keyed(
            crate::keys::TIMEOUT,
            DEFAULT_TIMEOUT.as_millis() as u64,
        );

        Self {
            retries,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Total number of attempts allowed.
    pub const fn attempts(&self) -> u64 {
        self.retries as u64 + 1
    }
}
