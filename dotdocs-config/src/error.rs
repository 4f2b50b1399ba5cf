use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or validating the docs manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid manifest: {0}")]
    Invalid(String),
}
