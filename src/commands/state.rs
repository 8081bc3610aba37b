//! `bbl state`

use anyhow::Result;
use bbl::domain::ports::CheckpointRepository;
use bbl::presentation::factory;
use bbl::presentation::output::StateSummary;

use crate::cli::Cli;

pub fn cmd_state(cli: &Cli) -> Result<()> {
    let repository = factory::create_checkpoint_repository(&cli.state_dir);
    let checkpoint = repository.load()?;
    let summary = StateSummary::from_checkpoint(&checkpoint);

    if cli.json {
        println!("{}", summary.to_json());
    } else {
        print!("{}", summary.to_text());
    }
    Ok(())
}
