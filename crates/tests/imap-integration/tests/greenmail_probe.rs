//! Docker-backed probe tests against GreenMail.

use std::error::Error;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn greenmail_is_available() -> Result<(), Box<dyn Error + Send + Sync>> {
    imap_integration::require_integration_tests_enabled()?;

    let container = imap_integration::start_greenmail().await?;

    let host = container.get_host().await?.to_string();
    let host_port = container
        .get_host_port_ipv4(imap_integration::IMAP_PORT)
        .await?;

    let address = config_bringup::resolve_host(&host, host_port).await?;
    let target = imap_probe::Target::inet(address, host_port);
    let policy = imap_probe::Policy {
        retries: 1,
        timeout: Duration::from_secs(3),
    };

    let status = imap_integration::wait_until_available(&target, &policy).await?;

    let response_time = status.response_time().ok_or("GreenMail should be available")?;
    assert!(response_time <= policy.timeout * (policy.retries + 1));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stopped_greenmail_is_unavailable() -> Result<(), Box<dyn Error + Send + Sync>> {
    imap_integration::require_integration_tests_enabled()?;

    let container = imap_integration::start_greenmail().await?;

    let host = container.get_host().await?.to_string();
    let host_port = container
        .get_host_port_ipv4(imap_integration::IMAP_PORT)
        .await?;

    let address = config_bringup::resolve_host(&host, host_port).await?;
    let target = imap_probe::Target::inet(address, host_port);
    let policy = imap_probe::Policy {
        retries: 2,
        timeout: Duration::from_millis(500),
    };

    imap_integration::wait_until_available(&target, &policy).await?;

    container.stop().await?;

    let status = imap_probe::poll(&target, &policy).await?;
    assert!(matches!(status, imap_probe::Status::Unavailable { .. }));

    Ok(())
}
