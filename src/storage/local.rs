//! Local filesystem storage implementation.
//!
//! Writes one pretty-printed JSON file per document under a root directory,
//! creating the directory on first use. Writes go to a temporary file that is
//! renamed into place, so a crash never leaves a half-written document.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::models::{ScrapedDocument, SeedRecord};
use crate::storage::{DocumentStorage, file_name};
use crate::utils::fs::save_json;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Directory documents are written to.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<PathBuf> {
        let path = self.root_dir.join(name);
        save_json(&path, value)?;
        log::info!("Saved scraped doc to: {}", path.display());
        Ok(path)
    }
}

impl DocumentStorage for LocalStorage {
    fn save_document(&self, doc: &ScrapedDocument) -> Result<PathBuf> {
        self.write(&file_name(doc, None), doc)
    }

    fn save_seed_record(&self, record: &SeedRecord) -> Result<PathBuf> {
        let name = file_name(&record.document, record.file_stub.as_deref());
        self.write(&name, record)
    }
}
