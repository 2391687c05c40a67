use itertools::Itertools;
use log::{debug, warn};
use scraper::{Html, Selector};

use crate::error::ScrapeError;
use crate::fetcher::Fetcher;

/// Relative path to a player's profile page, in listing order.
pub type ProfileLink = String;

const PLAYER_CELL: &str = r#"td[data-th="Player"]"#;

/// Reads the roster listing and pulls out one profile link per player cell.
pub struct LinkCollector<'a, T: Fetcher> {
    fetcher: &'a T,
}

impl<'a, T> LinkCollector<'a, T>
where
    T: Fetcher,
{
    pub fn new(fetcher: &'a T) -> Self {
        Self { fetcher }
    }

    /// Never fails: a bad status or an unreachable host is logged and
    /// yields no links.
    pub fn collect(&self, listing_url: &str) -> Vec<ProfileLink> {
        match self.try_collect(listing_url) {
            Ok(links) => links,
            Err(err) => {
                warn!("{}", err);
                Vec::new()
            }
        }
    }

    pub fn try_collect(&self, listing_url: &str) -> Result<Vec<ProfileLink>, ScrapeError> {
        let body = self
            .fetcher
            .fetch(listing_url)
            .into_body(listing_url, ScrapeError::ListingFetch)?;

        let links = parse_player_links(&String::from_utf8_lossy(&body));

        debug!("found {} player links on {}", links.len(), listing_url);

        Ok(links)
    }
}

/// First anchor `href` of every player cell, in document order. Cells
/// without an anchor, or with an empty `href`, are skipped.
pub fn parse_player_links(html: &str) -> Vec<ProfileLink> {
    let document = Html::parse_document(html);

    let (Ok(cells), Ok(anchor)) = (Selector::parse(PLAYER_CELL), Selector::parse("a")) else {
        return Vec::new();
    };

    document
        .select(&cells)
        .filter_map(|cell| cell.select(&anchor).next())
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect_vec()
}
