//! Error types for the layered configuration store.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised by the store, its loaders and the CLI around it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key is absent from the merged view (`get`) or the registry (`set`).
    #[error("No such config item: {0}")]
    UnknownKey(String),

    #[error("Config item {} can not be saved in project config.", .keys.join(","))]
    RestrictedKeyInProjectSave { keys: Vec<String> },

    #[error("Malformed config file {}: {source}", .path.display())]
    MalformedConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unsupported value for '{key}': {kind} is not a string, boolean or number")]
    UnsupportedValue { key: String, kind: &'static str },

    #[error("Config key '{key}' contains '.'; use nested tables instead")]
    DottedKey { key: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Could not determine the user's home directory")]
    HomeDirUnavailable,

    #[error("Logging error: {0}")]
    Logging(String),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}
