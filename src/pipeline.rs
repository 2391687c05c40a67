use log::info;

use crate::collector::LinkCollector;
use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::fetcher::{Fetcher, UReqFetcher};
use crate::images::{ImageFetcher, RunSummary};
use crate::locator::{PortraitLocator, StyleLocator};

/// Collects the roster links, then downloads every player's portrait.
pub struct Scraper<T: Fetcher> {
    config: ScrapeConfig,
    fetcher: T,
    locator: Box<dyn PortraitLocator>,
}

impl Scraper<UReqFetcher> {
    pub fn new(config: ScrapeConfig) -> Result<Self, ScrapeError> {
        let fetcher = UReqFetcher::new(config.timeout());
        Self::with_fetcher(config, fetcher)
    }
}

impl<T> Scraper<T>
where
    T: Fetcher,
{
    pub fn with_fetcher(config: ScrapeConfig, fetcher: T) -> Result<Self, ScrapeError> {
        config.validate()?;

        let locator = Box::new(StyleLocator::new(config.portrait_style.clone()));

        Ok(Scraper {
            config,
            fetcher,
            locator,
        })
    }

    /// Swaps the rule used to pick the portrait out of a profile page.
    pub fn with_locator(mut self, locator: impl PortraitLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    pub fn run(&self) -> Result<RunSummary, ScrapeError> {
        let links = LinkCollector::new(&self.fetcher).collect(&self.config.listing_url);

        if links.is_empty() {
            info!("No player links found on {}", self.config.listing_url);
            return Ok(RunSummary::default());
        }

        info!("Found {} player links", links.len());

        let images = ImageFetcher::new(
            &self.fetcher,
            &*self.locator,
            self.config.origin_url()?,
            &self.config.output_dir,
        );

        let summary = images.fetch_all(&links);

        info!(
            "Downloaded {} of {} images ({} failed)",
            summary.saved_count(),
            summary.links,
            summary.failed
        );

        Ok(summary)
    }
}
