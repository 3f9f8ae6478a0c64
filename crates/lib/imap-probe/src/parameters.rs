//! Keyed invocation parameters.

use std::collections::BTreeMap;
use std::str::FromStr;

/// Recognized parameter keys.
pub mod keys {
    /// TCP port, integer.
    pub const PORT: &str = "port";

    /// Number of retries after the first attempt, integer.
    pub const RETRIES: &str = "retries";

    /// Connect and read timeout in milliseconds, integer.
    pub const TIMEOUT: &str = "timeout";
}

/// A bag of keyed parameters supplied by the caller.
///
/// Values are kept as text and parsed on lookup; a value that fails to parse
/// falls back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    /// Raw values by key.
    values: BTreeMap<String, String>,
}

impl Parameters {
    /// An empty parameter bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Raw value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parsed value of a parameter, or `default` when absent or invalid.
    pub fn keyed<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(raw) = self.get(key) else {
            return default;
        };

        match raw.trim().parse() {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    parameter = key,
                    value = raw,
                    %error,
                    "invalid parameter value, using the default"
                );
                default
            }
        }
    }

    /// The `port` parameter.
    pub fn port(&self) -> u16 {
        self.keyed(keys::PORT, crate::DEFAULT_PORT)
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
