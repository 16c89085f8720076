// src/models/mod.rs

//! Domain models for the docs scraper.

mod config;
mod document;
mod seed;

// Re-export all public types
pub use config::{Config, LoggingConfig, PathsConfig, ScraperConfig};
pub use document::{DocType, ScrapedDocument, Section, Subsection, slugify};
pub use seed::{Domain, SeedConfig, SeedId, SeedRecord, SeedUrl, seed_label};
