//! Merge rules: defaults, override order, and provenance of merged values.

use crate::config::document::FlatMapping;

/// One physical source of configuration values, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Default,
    Home,
    Project,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Default => "default",
            Layer::Home => "home",
            Layer::Project => "project",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge the three layers; later layers win on conflicting keys.
pub fn merge_layers(defaults: &FlatMapping, home: &FlatMapping, project: &FlatMapping) -> FlatMapping {
    let mut data = defaults.clone();
    for layer in [home, project] {
        data.extend(layer.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    data
}

/// Highest-precedence layer that defines `key`.
pub fn resolve_layer(
    key: &str,
    defaults: &FlatMapping,
    home: &FlatMapping,
    project: &FlatMapping,
) -> Option<Layer> {
    [
        (Layer::Project, project),
        (Layer::Home, home),
        (Layer::Default, defaults),
    ]
    .into_iter()
    .find(|(_, mapping)| mapping.contains_key(key))
    .map(|(layer, _)| layer)
}
