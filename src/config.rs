use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ScrapeError;

pub const DEFAULT_LISTING_URL: &str = "https://basketball.realgm.com/nba/players";
pub const DEFAULT_ORIGIN: &str = "https://basketball.realgm.com";
pub const DEFAULT_OUTPUT_DIR: &str = "./player_images";
pub const DEFAULT_PORTRAIT_STYLE: &str =
    "border: 1px solid #000; float: left; margin-right: 15px; margin-top:5px;";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything a run needs to know. Missing keys in a config file fall back
/// to the defaults above.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub listing_url: String,
    pub origin: String,
    pub output_dir: PathBuf,
    pub portrait_style: String,
    pub timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            portrait_style: DEFAULT_PORTRAIT_STYLE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ScrapeConfig {
    pub fn from_file(path: &Path) -> Result<Self, ScrapeError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ScrapeError> {
        toml::from_str(raw).map_err(|e| ScrapeError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn origin_url(&self) -> Result<Url, ScrapeError> {
        parse_base(&self.origin)
    }

    pub fn listing_url(&self) -> Result<Url, ScrapeError> {
        parse_base(&self.listing_url)
    }

    /// Rejects configurations that could never produce a request.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        self.origin_url()?;
        self.listing_url()?;

        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config(String::from(
                "timeout_secs must be greater than zero",
            )));
        }

        if self.portrait_style.trim().is_empty() {
            return Err(ScrapeError::Config(String::from(
                "portrait_style must not be empty",
            )));
        }

        Ok(())
    }
}

fn parse_base(raw: &str) -> Result<Url, ScrapeError> {
    let url = Url::parse(raw).map_err(|e| ScrapeError::Config(format!("{raw}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(ScrapeError::Config(format!("{raw}: not a base url")));
    }

    Ok(url)
}
