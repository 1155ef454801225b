use std::time::Duration;

use log::error;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use scraper::Html;

const USER_AGENT_STR: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STR));

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        PageFetcher { client }
    }

    // Single GET, no retry. Transport errors and non-2xx statuses are logged
    // and collapse to None; the caller decides whether to skip or emit a
    // partial record.
    pub fn fetch(&self, url: &str) -> Option<Html> {
        let response = match self.client.get(url).send() {
            Ok(resp) => resp,
            Err(e) => {
                error!("Error fetching {}: {}", url, e);
                return None;
            }
        };

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                error!("Error fetching {}: {}", url, e);
                return None;
            }
        };

        match response.text() {
            Ok(body) => Some(Html::parse_document(&body)),
            Err(e) => {
                error!("Error reading body from {}: {}", url, e);
                None
            }
        }
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        PageFetcher::new()
    }
}
