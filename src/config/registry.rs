//! Static catalog of recognized configuration keys.

/// A recognized dotted configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKey {
    pub name: &'static str,
    pub description: &'static str,
    /// When set, the key may only be stored in the home layer.
    pub project_restricted: bool,
}

const CONFIG_KEYS: &[ConfigKey] = &[
    ConfigKey {
        name: "cache_dir",
        description: "The root directory of cached files",
        project_restricted: true,
    },
    ConfigKey {
        name: "python.path",
        description: "The Python interpreter path",
        project_restricted: false,
    },
    ConfigKey {
        name: "python.use_pyenv",
        description: "Use the pyenv interpreter",
        project_restricted: false,
    },
    ConfigKey {
        name: "pypi.url",
        description: "The URL of PyPI mirror, defaults to https://pypi.org/simple",
        project_restricted: false,
    },
    ConfigKey {
        name: "pypi.verify_ssl",
        description: "Verify SSL certificate when query PyPI",
        project_restricted: false,
    },
];

/// All registered keys, in declaration order.
pub fn all() -> &'static [ConfigKey] {
    CONFIG_KEYS
}

pub fn lookup(name: &str) -> Option<&'static ConfigKey> {
    CONFIG_KEYS.iter().find(|key| key.name == name)
}

pub fn is_registered(name: &str) -> bool {
    lookup(name).is_some()
}

/// Unregistered keys are treated as unrestricted; they can never reach the
/// dirty set through `set` anyway.
pub fn is_project_restricted(name: &str) -> bool {
    lookup(name).is_some_and(|key| key.project_restricted)
}
