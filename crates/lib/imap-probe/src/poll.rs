//! The retry loop.

use std::net::SocketAddr;

use crate::{AttemptError, ConfigurationError, Policy, Status, Target};

/// Poll the target for IMAP service availability.
///
/// Up to [`Policy::attempts`] connections are made, one after another, until
/// one of them completes the full banner/logout exchange. Each attempt that
/// fails for a network or protocol reason is logged and retried; only an
/// unusable target is reported as an error, before any connection is made.
pub async fn poll(target: &Target, policy: &Policy) -> Result<Status, ConfigurationError> {
    let addr = target.socket_addr()?;

    tracing::debug!(
        imap_address = %addr.ip(),
        imap_port = addr.port(),
        retries = policy.retries,
        timeout = ?policy.timeout,
        "polling IMAP service"
    );

    let mut status = Status::Unavailable { reason: None };
    let mut attempts_left = policy.attempts();
    let mut attempt: u64 = 0;

    while attempts_left > 0 && !status.is_available() {
        attempt += 1;

        let result = crate::attempt::run(addr, policy.timeout, &mut status).await;

        status = match result {
            Ok(response_time) => {
                tracing::debug!(
                    imap_address = %addr.ip(),
                    imap_port = addr.port(),
                    attempt,
                    response_time = ?response_time,
                    "IMAP service available"
                );
                Status::Available { response_time }
            }
            Err(error) => {
                log_down(addr, attempt, &error);
                Status::Unavailable {
                    reason: Some(error.to_string()),
                }
            }
        };

        attempts_left -= 1;
    }

    Ok(status)
}

/// Report a failed attempt at the severity its cause warrants.
fn log_down(addr: SocketAddr, attempt: u64, error: &AttemptError) {
    if error.is_elevated() {
        tracing::warn!(
            imap_address = %addr.ip(),
            imap_port = addr.port(),
            attempt,
            %error,
            "IMAP service unreachable"
        );
    } else {
        tracing::debug!(
            imap_address = %addr.ip(),
            imap_port = addr.port(),
            attempt,
            %error,
            "IMAP service attempt failed"
        );
    }
}
