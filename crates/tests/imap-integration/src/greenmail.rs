//! GreenMail container helpers.

use testcontainers::{
    GenericImage, core::IntoContainerPort as _, runners::AsyncRunner as _,
};

/// Starts a GreenMail container with its plain IMAP endpoint exposed.
pub async fn start_greenmail()
-> Result<testcontainers::ContainerAsync<GenericImage>, testcontainers::TestcontainersError> {
    let container = GenericImage::new("greenmail/standalone", "latest")
        .with_exposed_port(crate::IMAP_PORT.tcp())
        .with_wait_for(testcontainers::core::WaitFor::message_on_stdout(
            "Starting GreenMail API server at",
        ))
        .start()
        .await?;

    Ok(container)
}
