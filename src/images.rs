use std::path::PathBuf;

use log::{debug, warn};
use url::Url;

use crate::collector::ProfileLink;
use crate::downloader::{Download, DownloadTarget, Downloader};
use crate::error::ScrapeError;
use crate::fetcher::Fetcher;
use crate::locator::PortraitLocator;

/// Counts for one pass over the profile links.
#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub links: usize,
    pub saved: Vec<PathBuf>,
    pub failed: usize,
}

impl RunSummary {
    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }
}

/// Visits profile pages one by one and saves each player's portrait.
pub struct ImageFetcher<'a, T: Fetcher, L: PortraitLocator + ?Sized> {
    fetcher: &'a T,
    locator: &'a L,
    origin: Url,
    downloader: Downloader<'a, T>,
}

impl<'a, T, L> ImageFetcher<'a, T, L>
where
    T: Fetcher,
    L: PortraitLocator + ?Sized,
{
    pub fn new(fetcher: &'a T, locator: &'a L, origin: Url, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            locator,
            origin,
            downloader: Downloader::with_fetcher(output_dir, fetcher),
        }
    }

    /// A failure on one link is logged and never stops the next one.
    pub fn fetch_all(&self, links: &[ProfileLink]) -> RunSummary {
        let mut summary = RunSummary {
            links: links.len(),
            ..RunSummary::default()
        };

        for link in links {
            match self.fetch_one(link) {
                Ok(download) => summary.saved.push(download.file),
                Err(err) => {
                    warn!("{}", err);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    pub fn fetch_one(&self, link: &str) -> Result<Download, ScrapeError> {
        let page_url = self.resolve(link)?;

        let body = self
            .fetcher
            .fetch(page_url.as_str())
            .into_body(page_url.as_str(), ScrapeError::ProfileFetch)?;

        let src = self
            .locator
            .locate(&String::from_utf8_lossy(&body))
            .ok_or_else(|| ScrapeError::ImageMissing(link.to_string()))?;

        debug!("portrait for {}: {}", link, src);

        let target = DownloadTarget::from_src(self.resolve(&src)?, &src)?;

        self.downloader.download(&target)
    }

    fn resolve(&self, path: &str) -> Result<Url, ScrapeError> {
        self.origin
            .join(path)
            .map_err(|e| ScrapeError::InvalidUrl(format!("{path}: {e}")))
    }
}
