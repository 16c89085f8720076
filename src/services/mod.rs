//! Service layer for the docs scraper.
//!
//! This module contains the extraction logic:
//! - DOM navigation (`navigator`): main container, title, breadcrumbs
//! - URL/breadcrumb classification (`classifier`)
//! - Heading hierarchy walk (`sections`)
//! - Text and code cleanup (`cleaner`)
//! - Document assembly (`DocScraper`)

mod assembler;
pub mod classifier;
pub mod cleaner;
pub mod navigator;
pub mod sections;

pub use assembler::DocScraper;
