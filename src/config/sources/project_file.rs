//! Project config file source: <project_root>/.layerconf.toml

use crate::config::document::FlatMapping;
use crate::config::paths::project_config_path;
use crate::error::Result;
use std::path::Path;

/// Load the project layer for `project_root`.
pub fn load(project_root: &Path) -> Result<FlatMapping> {
    super::load(&project_config_path(project_root))
}
