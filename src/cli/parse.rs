//! CLI parse: clap types for layerconf. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Layerconf CLI - layered home and project configuration
#[derive(Parser)]
#[command(name = "layerconf")]
#[command(about = "Read and edit layered home/project configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective value of a config item
    Get {
        /// Dotted config key, e.g. python.path
        key: String,
    },
    /// Set a config item and save it
    Set {
        /// Dotted config key, e.g. pypi.url
        key: String,
        /// New value; "true"/"false" are stored as booleans
        value: String,
        /// Save to the home config instead of the project config
        #[arg(short, long)]
        global: bool,
    },
    /// Remove a config item (not supported)
    Unset {
        key: String,
    },
    /// List effective config values with their source
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List recognized config keys
    Keys {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
