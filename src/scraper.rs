use log::{error, info};
use url::Url;

use crate::delay_manager;
use crate::extractor::DetailExtractor;
use crate::fetcher::PageFetcher;
use crate::listing::ListingExtractor;
use crate::record::ProfileRecord;

pub const BASE_URL: &str = "https://www.muhasib.az";
pub const LISTINGS_PATH: &str = "cv_index.php";
pub const DEFAULT_MAX_PROFILES: usize = 500;

pub struct Scraper {
    fetcher: PageFetcher,
    listing: ListingExtractor,
    extractor: DetailExtractor,
    base: Url,
}

impl Scraper {
    pub fn new() -> Self {
        Scraper {
            fetcher: PageFetcher::new(),
            listing: ListingExtractor::new(),
            extractor: DetailExtractor::new(),
            base: Url::parse(BASE_URL).expect("Invalid base URL"),
        }
    }

    // Ids from the single listing page, numerically ordered for stable logs.
    // An empty result is terminal for the run, not an error here.
    pub fn scrape_listing_ids(&self) -> Vec<String> {
        info!("Scraping listings page...");
        let url = match self.base.join(LISTINGS_PATH) {
            Ok(u) => u,
            Err(e) => {
                error!("Failed to build listings URL: {}", e);
                return Vec::new();
            }
        };

        let document = match self.fetcher.fetch(url.as_str()) {
            Some(doc) => doc,
            None => {
                error!("Failed to fetch listings page");
                return Vec::new();
            }
        };

        let ids = self.listing.extract_ids(&document);
        info!("Found {} unique accountant IDs", ids.len());

        let mut ids: Vec<String> = ids.into_iter().collect();
        ids.sort_by_key(|id| id.parse::<u64>().unwrap_or(u64::MAX));
        ids
    }

    pub fn detail_url(&self, id: &str) -> String {
        match self.base.join(&format!("cv.php?id={}", id)) {
            Ok(u) => u.to_string(),
            Err(_) => format!("{}/cv.php?id={}", BASE_URL, id),
        }
    }

    // A failed fetch still yields a record carrying the id and url, so one
    // bad page never aborts the batch.
    pub fn scrape_detail(&self, id: &str) -> ProfileRecord {
        let url = self.detail_url(id);
        info!("Scraping details for accountant ID: {}", id);

        match self.fetcher.fetch(&url) {
            Some(document) => {
                let record = self.extractor.extract(&document, id, &url);
                let display = if record.name.is_empty() {
                    "Unknown"
                } else {
                    record.name.as_str()
                };
                info!("Successfully scraped data for {} (ID: {})", display, id);
                record
            }
            None => {
                error!("Failed to fetch details for ID: {}", id);
                ProfileRecord::with_id(id, &url)
            }
        }
    }

    pub fn run(&self, max_profiles: Option<usize>) -> Vec<ProfileRecord> {
        let mut ids = self.scrape_listing_ids();
        if ids.is_empty() {
            error!("No accountant IDs found. Exiting.");
            return Vec::new();
        }

        if let Some(max) = max_profiles {
            if ids.len() > max {
                ids.truncate(max);
                info!("Limiting scrape to {} accounts", max);
            }
        }

        let total = ids.len();
        let mut records = Vec::with_capacity(total);
        for (i, id) in ids.iter().enumerate() {
            info!("Processing {}/{}: ID {}", i + 1, total, id);
            records.push(self.scrape_detail(id));
            if i + 1 < total {
                delay_manager::random_detail_delay();
            }
        }

        info!("Scraping completed. Total records: {}", records.len());
        records
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Scraper::new()
    }
}
