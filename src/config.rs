//! Configuration System
//!
//! Layered key/value configuration for a project: compiled-in defaults, the
//! user's home config (`~/.layerconf/config.toml`) and the project config
//! (`<project_root>/.layerconf.toml`), merged into one dotted-key view.
//! Reads follow Project > Home > Default. Edits are tracked as pending and
//! written back, nested, into exactly one of the two files on save.

mod defaults;
mod document;
mod merge;
mod paths;
mod persist;
pub mod registry;
mod sources;
mod store;
mod value;

pub use defaults::{
    build_defaults, DefaultsResolver, PackageIndex, StaticDefaults, SystemDefaults,
    DEFAULT_INDEX_URL, INDEX_URL_ENV,
};
pub use document::{flatten, from_toml, to_toml, unflatten, Document, FlatMapping, Node};
pub use merge::{merge_layers, Layer};
pub use paths::{
    home_config_path, project_config_path, HOME_CONFIG_DIR, HOME_CONFIG_FILE,
    PROJECT_CONFIG_FILE,
};
pub use persist::{write_layer, Scope};
pub use registry::ConfigKey;
pub use sources::load as load_layer;
pub use store::{ConfigMap, ConfigStore};
pub use value::ConfigValue;
