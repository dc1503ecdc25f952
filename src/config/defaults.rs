//! Compiled-in defaults, seeded once per store from a resolver.

use crate::config::document::FlatMapping;
use crate::config::value::ConfigValue;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Index URL used when nothing else is configured.
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/simple";

/// Environment variable consulted for the package index URL.
pub const INDEX_URL_ENV: &str = "PIP_INDEX_URL";

/// Package index location and TLS policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIndex {
    pub url: String,
    pub verify_ssl: bool,
}

impl Default for PackageIndex {
    fn default() -> Self {
        Self {
            url: DEFAULT_INDEX_URL.to_string(),
            verify_ssl: true,
        }
    }
}

/// Supplies the platform-specific values the defaults are built from.
pub trait DefaultsResolver {
    /// User cache directory, if the platform has one.
    fn cache_dir(&self) -> Option<PathBuf>;

    fn package_index(&self) -> PackageIndex;
}

/// Resolver backed by the OS directory layout and the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDefaults;

impl DefaultsResolver for SystemDefaults {
    fn cache_dir(&self) -> Option<PathBuf> {
        ProjectDirs::from("", "", "layerconf").map(|dirs| dirs.cache_dir().to_path_buf())
    }

    fn package_index(&self) -> PackageIndex {
        match std::env::var(INDEX_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => PackageIndex {
                url: url.trim().to_string(),
                verify_ssl: true,
            },
            _ => PackageIndex::default(),
        }
    }
}

/// Fixed values, for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDefaults {
    pub cache_dir: Option<PathBuf>,
    pub package_index: PackageIndex,
}

impl DefaultsResolver for StaticDefaults {
    fn cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir.clone()
    }

    fn package_index(&self) -> PackageIndex {
        self.package_index.clone()
    }
}

/// Build the default layer.
pub fn build_defaults(resolver: &dyn DefaultsResolver) -> FlatMapping {
    let mut defaults = FlatMapping::new();
    if let Some(cache_dir) = resolver.cache_dir() {
        defaults.insert(
            "cache_dir".to_string(),
            ConfigValue::String(cache_dir.display().to_string()),
        );
    }
    defaults.insert("python.use_pyenv".to_string(), ConfigValue::Bool(true));

    let index = resolver.package_index();
    defaults.insert("pypi.url".to_string(), ConfigValue::String(index.url));
    defaults.insert(
        "pypi.verify_ssl".to_string(),
        ConfigValue::Bool(index.verify_ssl),
    );
    defaults
}
