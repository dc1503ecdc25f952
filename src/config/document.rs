//! Nested document model and conversion to and from flat dotted keys.

use crate::config::value::ConfigValue;
use crate::error::{ConfigError, Result};
use std::collections::BTreeMap;
use tracing::warn;

/// Dotted key to scalar value.
pub type FlatMapping = BTreeMap<String, ConfigValue>;

/// A nested document: table of named nodes.
pub type Document = BTreeMap<String, Node>;

/// One entry of a nested document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(ConfigValue),
    Table(Document),
}

/// Flatten a nested document into dotted keys.
pub fn flatten(document: &Document) -> FlatMapping {
    let mut flat = FlatMapping::new();
    flatten_into(document, None, &mut flat);
    flat
}

fn flatten_into(document: &Document, prefix: Option<&str>, flat: &mut FlatMapping) {
    for (key, node) in document {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match node {
            Node::Scalar(value) => {
                flat.insert(full_key, value.clone());
            }
            Node::Table(table) => flatten_into(table, Some(&full_key), flat),
        }
    }
}

/// Rebuild the nested document for a flat mapping.
///
/// Precondition: no key is a strict prefix (at a `.` boundary) of another
/// key. Violating it is a caller bug; the table for the longer key replaces
/// the shorter key's scalar.
pub fn unflatten(flat: &FlatMapping) -> Document {
    let mut root = Document::new();
    'keys: for (key, value) in flat {
        let mut parts: Vec<&str> = key.split('.').collect();
        let last = parts.pop().unwrap_or_default();

        let mut table = &mut root;
        for part in parts {
            let slot = table
                .entry(part.to_string())
                .or_insert_with(|| Node::Table(Document::new()));
            if let Node::Scalar(_) = slot {
                warn!(key = %key, segment = part, "Config key is both a leaf and a branch");
                *slot = Node::Table(Document::new());
            }
            let Node::Table(inner) = slot else {
                continue 'keys;
            };
            table = inner;
        }
        table.insert(last.to_string(), Node::Scalar(value.clone()));
    }
    root
}

/// Convert a parsed TOML table into a document.
///
/// Arrays and datetimes are outside the supported scalar set and are
/// rejected with the dotted key they were found under. Quoted keys containing
/// `.` are rejected too: flattened, they would collide with nested tables.
pub fn from_toml(table: toml::Table) -> Result<Document> {
    from_toml_table(table, None)
}

fn from_toml_table(table: toml::Table, prefix: Option<&str>) -> Result<Document> {
    let mut document = Document::new();
    for (key, value) in table {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        if key.contains('.') {
            return Err(ConfigError::DottedKey { key: full_key });
        }
        let node = match value {
            toml::Value::String(s) => Node::Scalar(ConfigValue::String(s)),
            toml::Value::Boolean(b) => Node::Scalar(ConfigValue::Bool(b)),
            toml::Value::Integer(i) => Node::Scalar(ConfigValue::Integer(i)),
            toml::Value::Float(f) => Node::Scalar(ConfigValue::Float(f)),
            toml::Value::Table(inner) => Node::Table(from_toml_table(inner, Some(&full_key))?),
            toml::Value::Array(_) => {
                return Err(ConfigError::UnsupportedValue {
                    key: full_key,
                    kind: "array",
                })
            }
            toml::Value::Datetime(_) => {
                return Err(ConfigError::UnsupportedValue {
                    key: full_key,
                    kind: "datetime",
                })
            }
        };
        document.insert(key, node);
    }
    Ok(document)
}

/// Convert a document into a TOML table ready for serialization.
pub fn to_toml(document: &Document) -> toml::Table {
    document
        .iter()
        .map(|(key, node)| {
            let value = match node {
                Node::Scalar(value) => value.to_toml(),
                Node::Table(table) => toml::Value::Table(to_toml(table)),
            };
            (key.clone(), value)
        })
        .collect()
}
