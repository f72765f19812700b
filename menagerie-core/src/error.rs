//! Error types for menagerie-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither the primary nor the fallback API key variable holds a value.
    #[error("API key missing; set {primary} (or {fallback}) in the environment or a .env file")]
    MissingApiKey {
        primary: &'static str,
        fallback: &'static str,
    },

    /// Underlying I/O failure while reading the settings file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings YAML could not be parsed.
    #[error("failed to parse settings at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`: cannot locate `~/.menagerie/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
