//! Persistence of pending edits into the home or project config file.

use crate::config::document::{self, FlatMapping};
use crate::config::registry;
use crate::config::store::ConfigStore;
use crate::error::{ConfigError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Which physical file a save writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `~/.layerconf/config.toml`
    Global,
    /// `<project_root>/.layerconf.toml`
    Project,
}

impl ConfigStore {
    /// Write pending edits into the file for `scope`.
    ///
    /// The whole layer is rewritten. Pending edits are cleared only once the
    /// write succeeded; on any failure both the edits and the in-memory layer
    /// are left as they were.
    pub fn save(&mut self, scope: Scope) -> Result<()> {
        if scope == Scope::Project {
            let restricted: Vec<String> = self
                .dirty
                .keys()
                .filter(|key| registry::is_project_restricted(key))
                .cloned()
                .collect();
            if !restricted.is_empty() {
                return Err(ConfigError::RestrictedKeyInProjectSave { keys: restricted });
            }
        }

        let (layer, path) = match scope {
            Scope::Global => (&self.home, &self.home_file),
            Scope::Project => (&self.project, &self.project_file),
        };
        let mut updated = layer.clone();
        updated.extend(self.dirty.iter().map(|(k, v)| (k.clone(), v.clone())));

        write_layer(path, &updated)?;
        info!(
            config_path = %path.display(),
            keys = self.dirty.len(),
            "Saved config"
        );

        match scope {
            Scope::Global => self.home = updated,
            Scope::Project => self.project = updated,
        }
        self.dirty.clear();
        Ok(())
    }
}

/// Serialize a flat layer to nested TOML and overwrite `path`.
pub fn write_layer(path: &Path, layer: &FlatMapping) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
    }

    let table = document::to_toml(&document::unflatten(layer));
    let content = toml::to_string_pretty(&table)?;
    debug!(config_path = %path.display(), bytes = content.len(), "Writing config file");
    std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))
}
