pub mod cli;
pub mod collector;
pub mod config;
pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod images;
pub mod locator;
pub mod logging;
pub mod pipeline;

pub use collector::{LinkCollector, ProfileLink};
pub use config::ScrapeConfig;
pub use downloader::{Download, DownloadTarget, Downloader};
pub use error::ScrapeError;
pub use fetcher::{Fetcher, Response, UReqFetcher};
pub use images::{ImageFetcher, RunSummary};
pub use locator::{PortraitLocator, StyleLocator};
pub use pipeline::Scraper;
