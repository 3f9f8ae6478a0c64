//! Error types.

/// Service bringup error.
#[derive(Debug, thiserror::Error)]
pub enum BringupError {
    /// Host name resolution failed.
    #[error("resolve host \"{host}\": {source}")]
    Resolve {
        /// The host that was looked up.
        host: String,

        /// Underlying resolver error.
        #[source]
        source: std::io::Error,
    },

    /// Host name resolution produced nothing.
    #[error("host \"{host}\" resolved to no addresses")]
    NoAddresses {
        /// The host that was looked up.
        host: String,
    },
}
