//! `bbl deploy-concourse`

use anyhow::Result;
use bbl::domain::value_objects::CloudCredentials;
use bbl::presentation::{factory, output};

use crate::cli::{Cli, CloudArgs};

use super::load_config;

pub fn cmd_deploy_concourse(cli: &Cli, args: &CloudArgs) -> Result<()> {
    let config = load_config(cli)?;
    let state_dir = cli.state_dir.as_path();

    let events = factory::create_event_sink(cli.json, cli.verbose, cli.quiet);
    let use_case = factory::create_bootstrap_use_case(&config, state_dir, events);
    let repository = factory::create_checkpoint_repository(state_dir);

    let credentials = CloudCredentials::new(
        args.aws_access_key_id.clone().unwrap_or_default(),
        args.aws_secret_access_key.clone().unwrap_or_default(),
        args.aws_region.clone().unwrap_or_default(),
    );

    match use_case.execute_and_persist(&repository, &credentials) {
        Ok(_) => Ok(()),
        Err(err) => {
            if cli.json {
                println!("{}", output::error_json("deploy-concourse", &err));
            }
            Err(err.into())
        }
    }
}
