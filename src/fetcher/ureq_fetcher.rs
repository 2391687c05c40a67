use std::io::Read;
use std::time::Duration;

use log::debug;
use ureq::Error::{Status, Transport};

use super::{Fetcher, Response};

pub const USER_AGENT: &str = concat!("player-headshots/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct UReqFetcher {
    agent: ureq::Agent,
}

impl Fetcher for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        debug!("GET {}", url);

        let response = self.agent.get(url).call();

        match response {
            Ok(response) if response.status() != 200 => Response::status(response.status()),

            Ok(response) => {
                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                let Ok(body) = body else {
                    return Response::invalid_body();
                };

                debug!("GET {} -> {} bytes", url, body.len());

                Response::ok(body)
            }

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => Response::network_error(transport.to_string()),
        }
    }
}

impl UReqFetcher {
    /// Every request made through this fetcher is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();

        UReqFetcher { agent }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
