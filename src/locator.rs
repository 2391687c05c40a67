use scraper::{Html, Selector};

use crate::config::DEFAULT_PORTRAIT_STYLE;

/// Finds the primary portrait on a profile page and returns its `src`.
pub trait PortraitLocator {
    fn locate(&self, html: &str) -> Option<String>;
}

/// Matches the first `<img>` whose inline `style` equals a fixed string.
/// The comparison is exact, whitespace included.
#[derive(Debug, Clone)]
pub struct StyleLocator {
    style: String,
}

impl StyleLocator {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }
}

impl Default for StyleLocator {
    fn default() -> Self {
        Self::new(DEFAULT_PORTRAIT_STYLE)
    }
}

impl PortraitLocator for StyleLocator {
    fn locate(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let images = Selector::parse("img").ok()?;

        document
            .select(&images)
            .find(|img| img.value().attr("style") == Some(self.style.as_str()))
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string)
    }
}
