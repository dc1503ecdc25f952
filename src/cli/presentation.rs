//! CLI presentation: text and JSON formatters for command results.

mod keys;
mod values;

pub use keys::{format_keys_json, format_keys_text};
pub use values::{format_list_json, format_list_text, ListRow};
