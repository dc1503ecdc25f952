//! Layer loading: read a TOML file into a flat dotted-key mapping.

pub mod global_file;
pub mod project_file;

use crate::config::document::{self, FlatMapping};
use crate::error::{ConfigError, Result};
use std::path::Path;
use tracing::debug;

/// Load one layer from `path`.
///
/// A path that is not an existing regular file yields an empty mapping.
/// Parse failures are surfaced as [`ConfigError::MalformedConfigFile`].
pub fn load(path: &Path) -> Result<FlatMapping> {
    if !path.is_file() {
        debug!(config_path = %path.display(), "Config file not present, using empty layer");
        return Ok(FlatMapping::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let table: toml::Table =
        toml::from_str(&content).map_err(|source| ConfigError::MalformedConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
    let flat = document::flatten(&document::from_toml(table)?);
    debug!(config_path = %path.display(), keys = flat.len(), "Loaded config layer");
    Ok(flat)
}
