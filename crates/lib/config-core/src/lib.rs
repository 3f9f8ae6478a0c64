//! Shared configuration types for imap-probe.

use std::collections::BTreeMap;

/// Root configuration.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// IMAP services to probe.
    pub services: Vec<ServiceConfig>,
}

/// A probed IMAP service.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Human-friendly name for logging and identification.
    pub name: String,

    /// Hostname or IP address of the IMAP server.
    pub host: String,

    /// Keyed probe parameters (`port`, `retries`, `timeout`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: BTreeMap<String, ParameterValue>,
}

/// A single probe parameter value.
///
/// Parameters are passed to the probe as text; integers are accepted
/// unquoted for convenience.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// An integer value.
    Integer(i64),

    /// A text value.
    Text(String),
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => value.fmt(f),
            Self::Text(value) => f.write_str(value),
        }
    }
}
