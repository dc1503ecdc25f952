//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ConfigError;

/// Map store errors to a string for CLI output.
pub fn map_error(e: &ConfigError) -> String {
    match e {
        ConfigError::UnsupportedOperation(_) => {
            format!("{}\nEdit the config file directly to remove an item.", e)
        }
        _ => e.to_string(),
    }
}
