// src/pipeline/seed.rs

//! Seed batch pipeline.
//!
//! Scrapes every seed URL in a seed configuration, one at a time. A seed that
//! fails to scrape is logged and skipped; the batch always runs to the end.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::models::{SeedConfig, SeedRecord, seed_label};
use crate::services::DocScraper;
use crate::storage::DocumentStorage;
use crate::utils::http::PageFetcher;

/// Summary of a seed batch run.
#[derive(Debug, Default)]
pub struct SeedOutcome {
    /// Paths of the saved documents, in seed order
    pub saved: Vec<PathBuf>,
    /// Entries skipped for lacking a URL
    pub skipped: usize,
    /// Entries whose scrape failed
    pub failures: usize,
}

/// Load a seed configuration file and run the batch over it.
///
/// A missing or malformed file aborts before any URL is fetched.
pub fn run_seed_file<F: PageFetcher>(
    scraper: &DocScraper<F>,
    storage: &dyn DocumentStorage,
    seed_path: &Path,
) -> Result<SeedOutcome> {
    log::info!("Loading seed config from: {}", seed_path.display());
    let seed = SeedConfig::load(seed_path)?;
    run_seed(scraper, storage, &seed)
}

/// Scrape and save every seed URL in `seed`.
///
/// Scrape failures are counted and logged; storage errors are returned.
pub fn run_seed<F: PageFetcher>(
    scraper: &DocScraper<F>,
    storage: &dyn DocumentStorage,
    seed: &SeedConfig,
) -> Result<SeedOutcome> {
    let mut outcome = SeedOutcome::default();

    for domain in &seed.domains {
        log::info!(
            "Processing domain {} - {} with {} seed URLs",
            domain.label(),
            domain.display_name(),
            domain.seed_urls.len()
        );

        for entry in &domain.seed_urls {
            let Some(url) = entry.url.as_deref().filter(|u| !u.trim().is_empty()) else {
                outcome.skipped += 1;
                log::warn!(
                    "Skipping: {}",
                    AppError::malformed_seed(domain.label(), seed_label(entry))
                );
                continue;
            };

            let doc = match scraper.scrape_single_url(url) {
                Ok(doc) => doc,
                Err(error) => {
                    outcome.failures += 1;
                    log::error!(
                        "Failed to scrape seed '{}' in domain {}: {}",
                        seed_label(entry),
                        domain.label(),
                        error
                    );
                    continue;
                }
            };

            let record = SeedRecord::new(doc, &seed.exam_code, domain, entry);
            outcome.saved.push(storage.save_seed_record(&record)?);
        }
    }

    log::info!(
        "Finished scraping all seeds. Total saved: {} ({} failed, {} skipped)",
        outcome.saved.len(),
        outcome.failures,
        outcome.skipped
    );

    Ok(outcome)
}
