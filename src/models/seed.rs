//! Seed configuration model (exam domains and their seed URLs).

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::ScrapedDocument;

/// Root seed configuration for a batch scrape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Exam this seed set belongs to
    #[serde(default = "default_exam_code")]
    pub exam_code: String,

    #[serde(default)]
    pub domains: Vec<Domain>,
}

/// A group of seed URLs covering one exam domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default)]
    pub id: Option<SeedId>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub seed_urls: Vec<SeedUrl>,
}

impl Domain {
    /// Display name, `domain-<id>` when the file leaves it out.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("domain-{id}"),
            (None, None) => "domain".to_string(),
        }
    }

    /// Label for log lines; "-" when it has no id.
    pub fn label(&self) -> String {
        self.id
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string)
    }
}

/// A single page to scrape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUrl {
    #[serde(default)]
    pub id: Option<SeedId>,

    /// Required; entries without it are skipped
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_source_type")]
    pub source_type: String,
}

/// Identifier that may be written as a number or a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SeedId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedId::Number(n) => write!(f, "{n}"),
            SeedId::Text(s) => f.write_str(s),
        }
    }
}

impl SeedId {
    /// Zero and blank text do not identify anything.
    pub fn is_blank(&self) -> bool {
        match self {
            SeedId::Number(n) => *n == 0,
            SeedId::Text(s) => s.trim().is_empty(),
        }
    }
}

impl From<i64> for SeedId {
    fn from(n: i64) -> Self {
        SeedId::Number(n)
    }
}

impl From<&str> for SeedId {
    fn from(s: &str) -> Self {
        SeedId::Text(s.to_string())
    }
}

fn default_exam_code() -> String {
    "unknown_exam".to_string()
}

fn default_source_type() -> String {
    "manual".to_string()
}

impl SeedConfig {
    /// Load a seed configuration from a JSON file.
    ///
    /// Any failure (missing file, invalid JSON, wrong shape) is a `ConfigRead` error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AppError::config_read(path, e))?;
        serde_json::from_str(&content).map_err(|e| AppError::config_read(path, e))
    }

    /// Total number of seed entries across all domains.
    pub fn seed_count(&self) -> usize {
        self.domains.iter().map(|d| d.seed_urls.len()).sum()
    }

    /// Seed entries that have no URL, as `MalformedSeed` errors.
    pub fn malformed_entries(&self) -> Vec<AppError> {
        self.domains
            .iter()
            .flat_map(|domain| {
                domain
                    .seed_urls
                    .iter()
                    .filter(|seed| seed.url.as_deref().is_none_or(str::is_empty))
                    .map(move |seed| AppError::malformed_seed(domain.label(), seed_label(seed)))
            })
            .collect()
    }

    /// Starter configuration written by `init`.
    pub fn starter() -> Self {
        let seed = |id: &str, url: &str| SeedUrl {
            id: Some(SeedId::from(id)),
            url: Some(url.to_string()),
            source_type: default_source_type(),
        };

        Self {
            exam_code: "ASSOC_DEV_PY".to_string(),
            domains: vec![
                Domain {
                    id: Some(SeedId::from(1)),
                    name: Some("Core Concepts".to_string()),
                    seed_urls: vec![
                        seed("crud", "https://www.mongodb.com/docs/manual/crud/"),
                        seed("aggregation", "https://www.mongodb.com/docs/manual/aggregation/"),
                        seed("indexes", "https://www.mongodb.com/docs/manual/indexes/"),
                        seed(
                            "transactions",
                            "https://www.mongodb.com/docs/manual/core/transactions/",
                        ),
                    ],
                },
                Domain {
                    id: Some(SeedId::from(2)),
                    name: Some("CRUD Methods".to_string()),
                    seed_urls: vec![
                        seed(
                            "insert-one",
                            "https://www.mongodb.com/docs/manual/reference/method/db.collection.insertOne/",
                        ),
                        seed(
                            "find",
                            "https://www.mongodb.com/docs/manual/reference/method/db.collection.find/",
                        ),
                        seed(
                            "update-one",
                            "https://www.mongodb.com/docs/manual/reference/method/db.collection.updateOne/",
                        ),
                    ],
                },
                Domain {
                    id: Some(SeedId::from(6)),
                    name: Some("PyMongo Driver".to_string()),
                    seed_urls: vec![
                        seed(
                            "pymongo-get-started",
                            "https://www.mongodb.com/docs/languages/python/pymongo-driver/current/get-started/",
                        ),
                        seed(
                            "pymongo-crud",
                            "https://www.mongodb.com/docs/languages/python/pymongo-driver/current/crud/query/find/",
                        ),
                    ],
                },
            ],
        }
    }
}

/// Label for a seed in log lines; "-" when it has no id.
pub fn seed_label(seed: &SeedUrl) -> String {
    seed.id
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

/// A scraped document enriched with the seed it came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedRecord {
    #[serde(flatten)]
    pub document: ScrapedDocument,

    pub exam_code: String,
    pub domain_id: Option<SeedId>,
    pub domain_name: String,
    pub seed_id: Option<SeedId>,
    pub source_type: String,

    /// `d<domain_id>_<seed_id>`, only when the domain has an id and the seed a non-blank one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_stub: Option<String>,
}

impl SeedRecord {
    /// Attach seed metadata to a scraped document.
    pub fn new(document: ScrapedDocument, exam_code: &str, domain: &Domain, seed: &SeedUrl) -> Self {
        let seed_id = seed.id.as_ref().filter(|id| !id.is_blank());
        let file_stub = domain
            .id
            .as_ref()
            .zip(seed_id)
            .map(|(domain_id, seed_id)| format!("d{domain_id}_{seed_id}"));
        Self {
            document,
            exam_code: exam_code.to_string(),
            domain_id: domain.id.clone(),
            domain_name: domain.display_name(),
            seed_id: seed.id.clone(),
            source_type: seed.source_type.clone(),
            file_stub,
        }
    }
}
