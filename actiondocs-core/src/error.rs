//! Error types for actiondocs-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading action metadata or patch configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file did not exist at the expected path.
    #[error("file not found at {path}")]
    NotFound { path: PathBuf },

    /// YAML parse error on load: includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Underlying I/O failure other than a missing file (permission denied, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration parsed but holds values the patcher cannot honour.
    #[error("invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },
}

impl LoadError {
    /// `true` for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
