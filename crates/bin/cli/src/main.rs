//! One-shot IMAP availability check of every configured service.

use std::process::ExitCode;

/// Poll every configured service once, concurrently, and print the results.
#[tokio::main]
async fn main() -> color_eyre::eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let config = config_load::with_default_env_var().await?;
    tracing::info!(
        config_path = %config.path.display(),
        services = config.payload.services.len(),
        "loaded config"
    );

    let mut exit_code = ExitCode::SUCCESS;

    let services = config_bringup::bringup_services(&config.payload).await;

    let mut join_set = tokio::task::JoinSet::new();
    for (service_config, service) in config.payload.services.iter().zip(services) {
        let service = match service {
            Ok(service) => service,
            Err(error) => {
                tracing::error!(
                    service = %service_config.name,
                    %error,
                    "unable to bring up service"
                );
                exit_code = ExitCode::FAILURE;
                continue;
            }
        };

        join_set.spawn(async move {
            let status = imap_probe::poll(&service.target, &service.policy).await;
            (service, status)
        });
    }
    drop(config);

    while let Some(result) = join_set.join_next().await {
        let (service, status) = result?;

        match status {
            Ok(imap_probe::Status::Available { response_time }) => {
                println!(
                    "{} available response_time_ms={:.3}",
                    service.name,
                    response_time.as_secs_f64() * 1000.0
                );
            }
            Ok(imap_probe::Status::Unavailable {
                reason: Some(reason),
            }) => println!("{} unavailable reason={reason:?}", service.name),
            Ok(_) => println!("{} unavailable", service.name),
            Err(error) => {
                tracing::error!(service = %service.name, %error, "unable to poll service");
                exit_code = ExitCode::FAILURE;
            }
        }
    }

    Ok(exit_code)
}
