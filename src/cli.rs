//! CLI Argument Parsing
//!
//! Global flags (--state-dir, --config, --json, --endpoint-override) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// bbl - bootstrap a BOSH director with a resumable checkpoint
#[derive(Parser, Debug)]
#[command(name = "bbl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding state.json and bbl.toml
    #[arg(long, global = true, env = "BBL_STATE_DIR", default_value = ".")]
    pub state_dir: PathBuf,

    /// Config file (defaults to <state-dir>/bbl.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress progress output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Alternate cloud endpoint
    #[arg(long, global = true)]
    pub endpoint_override: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision infrastructure and deploy a director for Concourse
    DeployConcourse(CloudArgs),

    /// Print a redacted summary of the saved state
    State,
}

/// Cloud credentials; any flag given replaces the stored value
#[derive(Args, Debug, Default)]
pub struct CloudArgs {
    /// Access key id
    #[arg(long, env = "BBL_AWS_ACCESS_KEY_ID")]
    pub aws_access_key_id: Option<String>,

    /// Secret access key
    #[arg(long, env = "BBL_AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub aws_secret_access_key: Option<String>,

    /// Region
    #[arg(long, env = "BBL_AWS_REGION")]
    pub aws_region: Option<String>,
}
