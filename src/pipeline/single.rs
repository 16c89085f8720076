// src/pipeline/single.rs

//! Single-page scraping pipeline.

use std::path::PathBuf;

use crate::error::Result;
use crate::services::DocScraper;
use crate::storage::DocumentStorage;
use crate::utils::http::PageFetcher;

/// Scrape one URL and save it. Any fetch or write error is returned as-is.
pub fn run_single<F: PageFetcher>(
    scraper: &DocScraper<F>,
    storage: &dyn DocumentStorage,
    url: &str,
) -> Result<PathBuf> {
    let doc = scraper.scrape_single_url(url)?;
    storage.save_document(&doc)
}
