//! CLI domain: parse, route, output, and presentation only.
//! No store logic; a single route table dispatches to the config store.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_keys_json, format_keys_text, format_list_json, format_list_text, ListRow,
};
pub use route::RunContext;
