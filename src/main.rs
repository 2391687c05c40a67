use anyhow::Result;
use clap::Parser;

use player_headshots::cli::Cli;
use player_headshots::{logging, Scraper};

fn main() -> Result<()> {
    logging::init_logger();

    let config = Cli::parse().into_config()?;

    let scraper = Scraper::new(config)?;

    scraper.run()?;

    Ok(())
}
