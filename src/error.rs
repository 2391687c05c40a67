use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to retrieve the webpage. Status code: {0}")]
    ListingFetch(u16),

    #[error("Failed to retrieve the player's page. Status code: {0}")]
    ProfileFetch(u16),

    #[error("No image found for {0}")]
    ImageMissing(String),

    #[error("Failed to retrieve the image. Status code: {0}")]
    ImageDownload(u16),

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Cannot derive a player name from image {0}")]
    BadImageName(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
