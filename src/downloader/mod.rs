mod target;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

pub use target::{player_file_name, DownloadTarget};

use crate::error::ScrapeError;
use crate::fetcher::Fetcher;

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub size: usize,
}

impl Download {
    pub fn new(source: String, file: PathBuf, size: usize) -> Self {
        Self { source, file, size }
    }
}

/// Saves images into one flat directory. Same-named files are replaced.
pub struct Downloader<'a, T: Fetcher> {
    fetcher: &'a T,
    path: PathBuf,
}

impl<'a, T> Downloader<'a, T>
where
    T: Fetcher,
{
    /// The directory is not touched until the first download.
    pub fn with_fetcher(path: impl Into<PathBuf>, fetcher: &'a T) -> Self {
        Downloader {
            fetcher,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn download(&self, target: &DownloadTarget) -> Result<Download, ScrapeError> {
        Self::ensure_dir(&self.path)?;

        let url = target.url.as_str();

        let body = self
            .fetcher
            .fetch(url)
            .into_body(url, ScrapeError::ImageDownload)?;

        let file_path = self.path.join(&target.file_name);

        fs::write(&file_path, &body).map_err(|e| ScrapeError::io(&file_path, e))?;

        info!("Image successfully downloaded: {}", file_path.display());

        Ok(Download::new(String::from(url), file_path, body.len()))
    }

    fn ensure_dir(path: &Path) -> Result<(), ScrapeError> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| ScrapeError::io(path, e))?;
        }

        Ok(())
    }
}
