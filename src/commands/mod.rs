//! Command handlers

pub mod deploy;
pub mod state;

use anyhow::{Context, Result};
use bbl::config::{Config, ConfigWarning};

use crate::cli::Cli;

/// Resolve configuration: explicit file or discovered one, env, then flags
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("loading {}", path.display()))?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_layered(&cli.state_dir)?,
    };

    if !cli.json {
        print_warnings(&warnings);
    }

    if let Some(endpoint) = &cli.endpoint_override {
        config.cloud.endpoint_override = endpoint.clone();
    }
    Ok(config)
}

fn print_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}
