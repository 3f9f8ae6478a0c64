//! Tests for service bringup.

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use config_core::{Config, ParameterValue, ServiceConfig};

fn service(host: &str, parameters: &[(&str, ParameterValue)]) -> ServiceConfig {
    ServiceConfig {
        name: "test service".to_string(),
        host: host.to_string(),
        parameters: parameters
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[tokio::test]
async fn defaults_apply_without_parameters() {
    let service = config_bringup::bringup_service(&service("192.0.2.10", &[]))
        .await
        .unwrap();

    assert_eq!(service.name, "test service");
    assert_eq!(
        service.target,
        imap_probe::Target::inet(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10)), 143)
    );
    assert_eq!(service.policy, imap_probe::Policy::default());
}

#[tokio::test]
async fn parameters_shape_target_and_policy() {
    let config = service(
        "192.0.2.10",
        &[
            ("port", ParameterValue::Integer(1143)),
            ("retries", ParameterValue::Integer(3)),
            ("timeout", ParameterValue::Text("250".to_string())),
        ],
    );

    let service = config_bringup::bringup_service(&config).await.unwrap();

    assert_eq!(service.target.port, 1143);
    assert_eq!(service.policy.retries, 3);
    assert_eq!(service.policy.timeout, Duration::from_millis(250));
}

#[tokio::test]
async fn bracketed_ipv6_literal() {
    let address = config_bringup::resolve_host("[::1]", 143).await.unwrap();

    assert_eq!(address, IpAddr::V6(Ipv6Addr::LOCALHOST));
}

#[tokio::test]
async fn localhost_resolves() {
    let address = config_bringup::resolve_host("localhost", 143).await.unwrap();

    assert!(address.is_loopback());
}

#[tokio::test]
async fn unresolvable_host_is_an_error() {
    let error = config_bringup::resolve_host("does-not-exist.invalid", 143)
        .await
        .unwrap_err();

    assert!(error.to_string().contains("does-not-exist.invalid"));
}

#[tokio::test]
async fn bringup_services_keeps_order() {
    let config = Config {
        services: vec![service("127.0.0.1", &[]), service("::1", &[])],
    };

    let services = config_bringup::bringup_services(&config).await;

    assert_eq!(services.len(), 2);
    let second = services[1].as_ref().unwrap();
    assert_eq!(
        second.target.interface,
        imap_probe::Interface::Inet(IpAddr::V6(Ipv6Addr::LOCALHOST))
    );
}

#[tokio::test]
async fn broken_service_does_not_hide_the_rest() {
    let config = Config {
        services: vec![
            service("does-not-exist.invalid", &[]),
            service("192.0.2.10", &[]),
        ],
    };

    let services = config_bringup::bringup_services(&config).await;

    assert_eq!(services.len(), 2);
    let error = services[0].as_ref().unwrap_err();
    assert!(error.to_string().contains("does-not-exist.invalid"));
    assert_eq!(
        services[1].as_ref().unwrap().target,
        imap_probe::Target::inet(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10)), 143)
    );
}
