//! Layerconf: Layered Configuration Store
//!
//! Merges a user-home configuration file with a per-project configuration file
//! into a single dotted-key view, validates keys against a registry, and writes
//! edits back to the right file in nested TOML form.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigMap, ConfigStore, ConfigValue, Layer, Scope};
pub use error::{ConfigError, Result};
