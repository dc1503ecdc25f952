//! Registry listing for help output.

use crate::config::ConfigKey;
use crate::error::ConfigError;
use serde_json::json;

pub fn format_keys_text(keys: &[ConfigKey]) -> String {
    let mut output = String::from("Config items:\n");
    for key in keys {
        let scope = if key.project_restricted {
            "global only"
        } else {
            "global/project"
        };
        output.push_str(&format!(
            "  {:<20} {:<16} {}\n",
            key.name, scope, key.description
        ));
    }
    output.push_str(&format!("\nTotal: {} item(s)\n", keys.len()));
    output
}

pub fn format_keys_json(keys: &[ConfigKey]) -> Result<String, ConfigError> {
    let list: Vec<_> = keys
        .iter()
        .map(|key| {
            json!({
                "key": key.name,
                "description": key.description,
                "project_restricted": key.project_restricted,
            })
        })
        .collect();
    serde_json::to_string_pretty(&json!({ "keys": list })).map_err(ConfigError::from)
}
