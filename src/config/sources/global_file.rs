//! Global config file source: ~/.layerconf/config.toml

use crate::config::document::FlatMapping;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Load the home layer from `path`.
pub fn load(path: &Path) -> Result<FlatMapping> {
    if !path.exists() {
        debug!(
            config_path = %path.display(),
            "Global configuration file not found. \
             Use `layerconf set --global` to create it."
        );
    }
    super::load(path)
}
