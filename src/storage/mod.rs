//! Storage abstractions for scraped documents.
//!
//! Each document is written to its own JSON file in the raw data directory:
//!
//! ```text
//! data/raw/
//! ├── docs_db_collection_insertOne.json   # single mode, method page
//! ├── docs_crud.json                      # single mode, last URL segment
//! └── docs_d2_insert-one.json             # seed mode, d<domain>_<seed>
//! ```

pub mod local;

use std::path::PathBuf;

use crate::error::Result;
use crate::models::{ScrapedDocument, SeedRecord};
use crate::utils::url::{last_path_segment, sanitize_stub};

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for document storage backends.
pub trait DocumentStorage {
    /// Save a document scraped in single mode; returns where it went.
    fn save_document(&self, doc: &ScrapedDocument) -> Result<PathBuf>;

    /// Save a document scraped from a seed entry; returns where it went.
    fn save_seed_record(&self, record: &SeedRecord) -> Result<PathBuf>;
}

/// Output file name for a document.
///
/// Stub priority: explicit `file_stub`, then the method name, then the last
/// URL path segment, then "article".
pub fn file_name(doc: &ScrapedDocument, file_stub: Option<&str>) -> String {
    let stub = file_stub
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| doc.method_name.clone().filter(|m| !m.is_empty()))
        .or_else(|| last_path_segment(&doc.url))
        .unwrap_or_else(|| "article".to_string());

    format!("docs_{}.json", sanitize_stub(&stub))
}
