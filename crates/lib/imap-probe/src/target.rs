//! Probe target.

use std::net::{IpAddr, SocketAddr};

/// Default IMAP port.
pub const DEFAULT_PORT: u16 = 143;

/// The network interface a probe is pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interface {
    /// An IPv4 or IPv6 host address.
    Inet(IpAddr),

    /// An interface kind the probe has no way to connect to.
    Unsupported {
        /// Name of the interface kind, for diagnostics.
        kind: String,
    },
}

/// The endpoint to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Interface address.
    pub interface: Interface,

    /// TCP port.
    pub port: u16,
}

impl Target {
    /// A target on an inet address.
    pub const fn inet(address: IpAddr, port: u16) -> Self {
        Self {
            interface: Interface::Inet(address),
            port,
        }
    }

    /// A target on an inet address with the port taken from the `port`
    /// parameter, or [`DEFAULT_PORT`].
    pub fn from_parameters(address: IpAddr, parameters: &crate::Parameters) -> Self {
        Self::inet(address, parameters.port())
    }

    /// The socket address to connect to.
    pub fn socket_addr(&self) -> Result<SocketAddr, crate::ConfigurationError> {
        match &self.interface {
            Interface::Inet(address) => Ok(SocketAddr::new(*address, self.port)),
            Interface::Unsupported { kind } => {
                Err(crate::ConfigurationError::UnsupportedInterface { kind: kind.clone() })
            }
        }
    }
}
