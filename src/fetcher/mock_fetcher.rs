use std::cell::RefCell;
use std::collections::HashMap;

use super::{Fetcher, Response};

/// Serves canned responses by URL and remembers what was asked for.
/// Unknown URLs behave like an unreachable host.
#[derive(Default)]
pub struct MockFetcher {
    routes: HashMap<String, Response>,
    requests: RefCell<Vec<String>>,
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Response {
        self.requests.borrow_mut().push(url.to_string());

        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Response::network_error(format!("connection refused: {url}")))
    }
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, response: Response) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    pub fn html(self, url: &str, html: &str) -> Self {
        self.route(url, Response::ok(html.as_bytes().to_vec()))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}
