//! YAML configuration parsing for imap-probe.

use std::path::{Path, PathBuf};

use config_core::Config;

/// A convenience type-alias for the YAML parser error type.
pub type YamlError = serde_yaml_bw::Error;

/// Errors returned while loading a YAML configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the file.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the file contents.
    #[error("failed to parse YAML config {path}: {source}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying YAML parse error.
        source: YamlError,
    },
}

/// Parse configuration from a YAML string.
pub fn parse_str(contents: &str) -> Result<Config, YamlError> {
    serde_yaml_bw::from_str(contents)
}

/// Read and parse a YAML configuration file.
pub async fn load_from_path<P>(path: P) -> Result<Config, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
