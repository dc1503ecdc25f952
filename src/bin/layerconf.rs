//! Layerconf CLI Binary
//!
//! Command-line interface for the layered configuration store.

use clap::Parser;
use layerconf::cli::{Cli, RunContext};
use layerconf::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Layerconf CLI starting");

    let mut context = match RunContext::new(cli.project.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error opening config store: {}", e);
            eprintln!("{}", layerconf::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", layerconf::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        return LoggingConfig::off();
    }

    let mut config = LoggingConfig::default();
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
