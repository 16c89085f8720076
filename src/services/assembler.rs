// src/services/assembler.rs

//! Document assembler service.
//!
//! Fetches a documentation page and assembles the structured record:
//! classification from the URL, title and breadcrumbs from the DOM,
//! version from the breadcrumbs, and the cleaned section tree.

use chrono::Utc;
use scraper::Html;

use crate::error::Result;
use crate::models::{Config, ScrapedDocument};
use crate::services::{classifier, cleaner, navigator, sections};
use crate::utils::http::{HttpFetcher, PageFetcher};

/// Service for scraping documentation pages.
pub struct DocScraper<F = HttpFetcher> {
    fetcher: F,
}

impl DocScraper<HttpFetcher> {
    /// Create a scraper that fetches over HTTP with the configured settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpFetcher::from_config(&config.scraper)?))
    }
}

impl<F: PageFetcher> DocScraper<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch and parse a single page. Fetch errors are returned unchanged.
    pub fn scrape_single_url(&self, url: &str) -> Result<ScrapedDocument> {
        log::info!("Scraping URL: {}", url);
        let html = self.fetcher.fetch(url)?;
        Ok(Self::scrape_html(url, &html))
    }

    /// Build the structured record for markup already in hand.
    pub fn scrape_html(url: &str, html: &str) -> ScrapedDocument {
        let document = Html::parse_document(html);

        let main = navigator::find_main_container(&document);
        let title = navigator::extract_title(main, &document);
        let breadcrumbs = navigator::extract_breadcrumbs(&document);
        let (doc_type, method_name) = classifier::infer_doc_type_and_method(url);
        let version = classifier::infer_version(&breadcrumbs);

        let mut sections = sections::extract_sections(main);
        cleaner::clean_sections(&mut sections);

        log::debug!(
            "Parsed '{}' as {} with {} sections",
            title,
            doc_type,
            sections.len()
        );

        ScrapedDocument {
            url: url.to_string(),
            doc_type,
            method_name,
            title,
            version,
            breadcrumbs,
            sections,
            fetched_at: Utc::now(),
        }
    }
}
