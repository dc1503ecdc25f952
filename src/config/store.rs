//! The merged, mutable configuration view for one project.

use crate::config::defaults::{build_defaults, DefaultsResolver, SystemDefaults};
use crate::config::document::FlatMapping;
use crate::config::merge::{merge_layers, resolve_layer, Layer};
use crate::config::paths::{home_config_path, project_config_path};
use crate::config::registry;
use crate::config::sources::{global_file, project_file};
use crate::config::value::ConfigValue;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Map-like access to configuration values.
///
/// Iteration and length reflect the merged view only: registered keys that
/// no layer or default supplies are not enumerated.
pub trait ConfigMap {
    /// Effective value of `key`.
    fn get(&self, key: &str) -> Result<&ConfigValue>;

    /// Set a registered key, pending the next save.
    fn set(&mut self, key: &str, value: ConfigValue) -> Result<()>;

    /// Deletion is not supported and always fails without touching state.
    fn delete(&mut self, key: &str) -> Result<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &ConfigValue)> + '_>;

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(|(key, _)| key))
    }
}

/// Layered configuration: defaults, then home, then project.
///
/// Not synchronized. Two stores over the same files race on save and the
/// last writer wins.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    pub(crate) project_root: PathBuf,
    pub(crate) home_file: PathBuf,
    pub(crate) project_file: PathBuf,
    pub(crate) defaults: FlatMapping,
    pub(crate) home: FlatMapping,
    pub(crate) project: FlatMapping,
    pub(crate) data: FlatMapping,
    pub(crate) dirty: FlatMapping,
}

impl ConfigStore {
    /// Open the store for `project_root` using the user's home config and
    /// system defaults.
    pub fn open(project_root: impl Into<PathBuf>) -> Result<Self> {
        let home_file = home_config_path()?;
        Self::with_paths(project_root, home_file, &SystemDefaults)
    }

    /// Open the store with an explicit home config file and defaults resolver.
    pub fn with_paths(
        project_root: impl Into<PathBuf>,
        home_file: impl Into<PathBuf>,
        resolver: &dyn DefaultsResolver,
    ) -> Result<Self> {
        let project_root = project_root.into();
        let home_file = home_file.into();
        let project_file = project_config_path(&project_root);

        let defaults = build_defaults(resolver);
        let home = global_file::load(&home_file)?;
        let project = project_file::load(&project_root)?;
        let data = merge_layers(&defaults, &home, &project);

        debug!(
            project_root = %project_root.display(),
            home_keys = home.len(),
            project_keys = project.len(),
            merged_keys = data.len(),
            "Config store opened"
        );

        Ok(Self {
            project_root,
            home_file,
            project_file,
            defaults,
            home,
            project,
            data,
            dirty: FlatMapping::new(),
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn home_config_file(&self) -> &Path {
        &self.home_file
    }

    pub fn project_config_file(&self) -> &Path {
        &self.project_file
    }

    /// Highest-precedence layer holding the current value of `key`.
    ///
    /// `None` for keys with no value and for keys with unsaved edits. A value
    /// saved to home while the project layer still defines the key reports
    /// `Home` until the store is reopened.
    pub fn source_of(&self, key: &str) -> Option<Layer> {
        if self.dirty.contains_key(key) {
            return None;
        }
        let current = self.data.get(key)?;
        [Layer::Project, Layer::Home, Layer::Default]
            .into_iter()
            .find(|layer| self.layer(*layer).get(key) == Some(current))
    }

    /// Value `key` will have once the layers are reloaded from disk, ignoring
    /// unsaved edits.
    pub fn persisted_value(&self, key: &str) -> Option<&ConfigValue> {
        resolve_layer(key, &self.defaults, &self.home, &self.project)
            .and_then(|layer| self.layer(layer).get(key))
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn dirty_keys(&self) -> impl Iterator<Item = &str> {
        self.dirty.keys().map(String::as_str)
    }

    /// Unmerged values of one layer.
    pub fn layer(&self, layer: Layer) -> &FlatMapping {
        match layer {
            Layer::Default => &self.defaults,
            Layer::Home => &self.home,
            Layer::Project => &self.project,
        }
    }
}

impl ConfigMap for ConfigStore {
    fn get(&self, key: &str) -> Result<&ConfigValue> {
        self.data
            .get(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }

    fn set(&mut self, key: &str, value: ConfigValue) -> Result<()> {
        if !registry::is_registered(key) {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
        let value = value.coerce_bool();
        debug!(key, value = %value, "Config value set");
        self.dirty.insert(key.to_string(), value.clone());
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        Err(ConfigError::UnsupportedOperation(format!(
            "deleting config item '{}' is not supported",
            key
        )))
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &ConfigValue)> + '_> {
        Box::new(self.data.iter().map(|(k, v)| (k.as_str(), v)))
    }
}
