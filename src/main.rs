//! bbl CLI - bootstrap a BOSH director
//!
//! Usage: bbl [--state-dir DIR] <COMMAND>
//!
//! Commands:
//!   deploy-concourse  Provision infrastructure and deploy the director
//!   state             Print a redacted summary of the saved state

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::DeployConcourse(args) => commands::deploy::cmd_deploy_concourse(&cli, args),
        Commands::State => commands::state::cmd_state(&cli),
    }
}
