//! Probe helpers.

use std::time::Duration;

/// Polls the target until it is available or the attempts run out.
///
/// The container may accept connections before the IMAP service is ready,
/// so a few early unavailable results are expected.
pub async fn wait_until_available(
    target: &imap_probe::Target,
    policy: &imap_probe::Policy,
) -> Result<imap_probe::Status, imap_probe::ConfigurationError> {
    let mut attempts = 60u8;
    loop {
        let status = imap_probe::poll(target, policy).await?;
        if status.is_available() {
            return Ok(status);
        }

        let Some(attempts_left) = attempts.checked_sub(1) else {
            return Ok(status);
        };

        attempts = attempts_left;
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}
