//! Effective value listing: text table and JSON.

use crate::config::{registry, ConfigMap, ConfigStore, ConfigValue, Layer};
use crate::error::ConfigError;
use serde_json::json;

/// One row of `layerconf list`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub key: String,
    pub value: ConfigValue,
    /// `None` while the value has unsaved edits.
    pub source: Option<Layer>,
    pub description: Option<&'static str>,
}

impl ListRow {
    pub fn collect(store: &ConfigStore) -> Vec<ListRow> {
        store
            .iter()
            .map(|(key, value)| ListRow {
                key: key.to_string(),
                value: value.clone(),
                source: store.source_of(key),
                description: registry::lookup(key).map(|k| k.description),
            })
            .collect()
    }
}

fn source_label(source: Option<Layer>) -> &'static str {
    source.map(Layer::as_str).unwrap_or("pending")
}

pub fn format_list_text(rows: &[ListRow]) -> String {
    if rows.is_empty() {
        return "No config items set.".to_string();
    }
    use comfy_table::Table;
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Key", "Value", "Source", "Description"]);
    for row in rows {
        table.add_row(vec![
            row.key.clone(),
            row.value.to_string(),
            source_label(row.source).to_string(),
            row.description.unwrap_or("-").to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_list_json(rows: &[ListRow]) -> Result<String, ConfigError> {
    let items: Vec<_> = rows
        .iter()
        .map(|row| {
            json!({
                "key": row.key,
                "value": row.value,
                "source": source_label(row.source),
                "description": row.description,
            })
        })
        .collect();
    let out = json!({ "items": items, "total": rows.len() });
    serde_json::to_string_pretty(&out).map_err(ConfigError::from)
}
