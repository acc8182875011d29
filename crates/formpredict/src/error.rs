use formpredict_config::ConfigError;
use formpredict_core::FormPredictError;
use thiserror::Error;

/// Application-level error for wiring and the command line.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] FormPredictError),

    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// A variant failed to load; wraps the underlying cause.
    #[error("variant '{id}': {source}")]
    Variant {
        id: String,
        #[source]
        source: Box<Error>,
    },

    /// Malformed command-line input
    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
