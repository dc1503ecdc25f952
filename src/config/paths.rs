//! Filesystem locations of the configuration layers.

use crate::error::{ConfigError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Directory under the user's home holding the global config.
pub const HOME_CONFIG_DIR: &str = ".layerconf";

/// File name of the global config inside [`HOME_CONFIG_DIR`].
pub const HOME_CONFIG_FILE: &str = "config.toml";

/// File name of the per-project config at the project root.
pub const PROJECT_CONFIG_FILE: &str = ".layerconf.toml";

/// Path to the global config file: `~/.layerconf/config.toml`.
pub fn home_config_path() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(base
        .home_dir()
        .join(HOME_CONFIG_DIR)
        .join(HOME_CONFIG_FILE))
}

pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_FILE)
}
