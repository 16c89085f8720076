// src/lib.rs

//! MongoDB docs scraper library.
//!
//! Fetches documentation pages and extracts title, breadcrumbs, the
//! section/subsection hierarchy, and code blocks into JSON records.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
