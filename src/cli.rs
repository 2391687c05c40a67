use std::path::PathBuf;

use clap::Parser;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

#[derive(Debug, Parser)]
#[command(name = "player-headshots")]
#[command(about = "Download NBA player headshots from a roster listing", long_about = None)]
pub struct Cli {
    /// TOML file with any of the options below
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Roster page listing every player
    #[arg(long)]
    pub listing_url: Option<String>,

    /// Site origin that profile and image paths are relative to
    #[arg(long)]
    pub origin: Option<String>,

    /// Directory the images are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Exact inline style of the portrait <img>
    #[arg(long)]
    pub portrait_style: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn into_config(self) -> Result<ScrapeConfig, ScrapeError> {
        let mut config = match &self.config {
            Some(path) => ScrapeConfig::from_file(path)?,
            None => ScrapeConfig::default(),
        };

        if let Some(listing_url) = self.listing_url {
            config.listing_url = listing_url;
        }
        if let Some(origin) = self.origin {
            config.origin = origin;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(portrait_style) = self.portrait_style {
            config.portrait_style = portrait_style;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }

        config.validate()?;

        Ok(config)
    }
}
