//! Lift raw config into probe inputs.

use std::net::IpAddr;

mod error;

pub use error::*;

/// A service ready to be probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Human-friendly name for logging and identification.
    pub name: String,

    /// Where to connect.
    pub target: imap_probe::Target,

    /// How hard to try.
    pub policy: imap_probe::Policy,
}

/// Convert config parameters into the probe parameter bag.
pub fn parameters(service: &config_core::ServiceConfig) -> imap_probe::Parameters {
    service
        .parameters
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string()))
        .collect()
}

/// Resolve a configured host into an address.
///
/// IP literals (optionally bracketed) are used as is; anything else goes
/// through the system resolver and the first address wins.
pub async fn resolve_host(host: &str, port: u16) -> Result<IpAddr, BringupError> {
    let literal = host
        .strip_prefix('[')
        .and_then(|host| host.strip_suffix(']'))
        .unwrap_or(host);
    if let Ok(address) = literal.parse() {
        return Ok(address);
    }

    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|source| BringupError::Resolve {
            host: host.to_owned(),
            source,
        })?;

    let addr = addrs.next().ok_or_else(|| BringupError::NoAddresses {
        host: host.to_owned(),
    })?;

    tracing::debug!(imap_host = %host, imap_address = %addr.ip(), "resolved host");

    Ok(addr.ip())
}

/// Build a probe-ready service from its config.
pub async fn bringup_service(
    service: &config_core::ServiceConfig,
) -> Result<Service, BringupError> {
    let parameters = parameters(service);
    let port = parameters.port();
    let address = resolve_host(&service.host, port).await?;

    Ok(Service {
        name: service.name.clone(),
        target: imap_probe::Target::inet(address, port),
        policy: imap_probe::Policy::from_parameters(&parameters),
    })
}

/// Build probe-ready services for every configured service.
///
/// Each service is brought up on its own: the results follow the config
/// order, and one broken service does not hide the others.
pub async fn bringup_services(config: &config_core::Config) -> Vec<Result<Service, BringupError>> {
    let mut services = Vec::with_capacity(config.services.len());

    for service in &config.services {
        services.push(bringup_service(service).await);
    }

    services
}
