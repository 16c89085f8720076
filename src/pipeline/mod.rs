//! Pipeline entry points for scraper operations.
//!
//! - `run_single`: Scrape one URL and save it
//! - `run_seed` / `run_seed_file`: Scrape every URL in a seed configuration

pub mod seed;
pub mod single;

pub use seed::{SeedOutcome, run_seed, run_seed_file};
pub use single::run_single;
