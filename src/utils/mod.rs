//! Utility functions and helpers.

pub mod fs;
pub mod http;
pub mod url;

pub use http::{HttpFetcher, PageFetcher};
