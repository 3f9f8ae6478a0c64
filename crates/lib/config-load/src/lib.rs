//! Configuration file discovery and loading for imap-probe.

use std::path::{Path, PathBuf};

use config_core::Config;

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "IMAP_PROBE_CONFIG";

/// A payload annotated with the file it came from.
#[derive(Debug)]
pub struct Located<T> {
    /// The actual payload.
    pub payload: T,

    /// The file the payload was read from.
    pub path: PathBuf,
}

/// Errors returned while locating a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// None of the candidate paths exist.
    #[error("no config file found in paths: {paths:?}")]
    NotFound {
        /// The paths that were tried.
        paths: Vec<PathBuf>,
    },

    /// A candidate exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Read the first candidate path that exists.
///
/// Missing files are skipped; any other read failure stops the search.
pub async fn locate<P>(paths: &[P]) -> Result<Located<String>, LocateError>
where
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(payload) => {
                tracing::debug!(config_path = %path.display(), "found config file");
                return Ok(Located {
                    payload,
                    path: path.to_path_buf(),
                });
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(LocateError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    Err(LocateError::NotFound {
        paths: paths.iter().map(|path| path.as_ref().to_path_buf()).collect(),
    })
}

/// Errors returned while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to locate the configuration file.
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying YAML error.
        #[source]
        source: config_yaml::YamlError,
    },
}

/// Load configuration from the override path, or from the first existing
/// default path.
pub async fn with(override_path: Option<PathBuf>) -> Result<Located<Config>, LoadError> {
    let paths: Vec<PathBuf> = config_paths::resolve(override_path).collect();
    let Located { payload, path } = locate(&paths).await?;

    match config_yaml::parse_str(&payload) {
        Ok(payload) => Ok(Located { payload, path }),
        Err(source) => Err(LoadError::Parse { path, source }),
    }
}

/// Errors returned by [`with_default_env_var`].
#[cfg(feature = "env")]
#[derive(Debug, thiserror::Error)]
pub enum WithDefaultEnvVarError {
    /// The override variable is set but unusable.
    #[error("config path env var read: {0}")]
    Env(#[source] envfury::Error<envfury::ValueError<<PathBuf as std::str::FromStr>::Err>>),

    /// Loading the configuration failed.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Load configuration, honoring the [`CONFIG_PATH_ENV`] override.
#[cfg(feature = "env")]
pub async fn with_default_env_var() -> Result<Located<Config>, WithDefaultEnvVarError> {
    let override_path = envfury::maybe(CONFIG_PATH_ENV).map_err(WithDefaultEnvVarError::Env)?;
    Ok(with(override_path).await?)
}
