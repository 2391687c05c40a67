mod ureq_fetcher;

pub use ureq_fetcher::UReqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;

use crate::error::ScrapeError;

/// Outcome of a single GET as seen by the scraper.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Ok(Vec<u8>),
    /// Any status other than 200.
    Status(u16),
    InvalidBody,
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }

    /// Unwraps the body, turning a non-200 status into the error built by
    /// `on_status` and anything lower level into [`ScrapeError::Transport`].
    pub fn into_body<E>(self, url: &str, on_status: E) -> Result<Vec<u8>, ScrapeError>
    where
        E: FnOnce(u16) -> ScrapeError,
    {
        match self {
            Response::Ok(body) => Ok(body),
            Response::Status(code) => Err(on_status(code)),
            Response::InvalidBody => Err(ScrapeError::Transport {
                url: url.to_string(),
                message: String::from("response body could not be read"),
            }),
            Response::NetworkError(message) => Err(ScrapeError::Transport {
                url: url.to_string(),
                message,
            }),
        }
    }
}

/// Anything that can perform a blocking GET.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Response;
}

impl<T> Fetcher for &T
where
    T: Fetcher + ?Sized,
{
    fn fetch(&self, url: &str) -> Response {
        (**self).fetch(url)
    }
}
