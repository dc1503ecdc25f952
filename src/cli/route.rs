//! CLI route: single route table and run context. Dispatches to the config store and presentation.

use crate::config::{registry, ConfigMap, ConfigStore, ConfigValue, Scope};
use crate::error::ConfigError;
use std::path::PathBuf;
use tracing::info;

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_keys_json, format_keys_text, format_list_json, format_list_text, ListRow,
};

/// Runtime context for CLI execution: the store opened for one project root.
pub struct RunContext {
    store: ConfigStore,
}

impl RunContext {
    /// Open the store for `project_root` with the user's home config.
    pub fn new(project_root: PathBuf) -> Result<Self, ConfigError> {
        Ok(Self::from_store(ConfigStore::open(project_root)?))
    }

    pub fn from_store(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Execute a command and return its printable output.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ConfigError> {
        match command {
            Commands::Get { key } => Ok(self.store.get(key)?.to_string()),
            Commands::Set { key, value, global } => {
                let scope = if *global { Scope::Global } else { Scope::Project };
                self.store.set(key, ConfigValue::from(value.as_str()))?;
                self.store.save(scope)?;
                let path = match scope {
                    Scope::Global => self.store.home_config_file(),
                    Scope::Project => self.store.project_config_file(),
                };
                info!(key = %key, config_path = %path.display(), "Config item updated");
                let value = self.store.get(key)?;
                let mut output = format!(
                    "Config item {} set to {} in {}",
                    key,
                    value,
                    path.display()
                );
                if let Some(effective) = self.store.persisted_value(key) {
                    if effective != value {
                        output.push_str(&format!(
                            "\nNote: overridden by {}; effective value is {}",
                            self.store.project_config_file().display(),
                            effective
                        ));
                    }
                }
                Ok(output)
            }
            Commands::Unset { key } => {
                self.store.delete(key)?;
                Ok(String::new())
            }
            Commands::List { format } => {
                let rows = ListRow::collect(&self.store);
                if format == "json" {
                    format_list_json(&rows)
                } else {
                    Ok(format_list_text(&rows))
                }
            }
            Commands::Keys { format } => {
                if format == "json" {
                    format_keys_json(registry::all())
                } else {
                    Ok(format_keys_text(registry::all()))
                }
            }
        }
    }
}
