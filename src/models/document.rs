//! Scraped document data structures.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of a documentation page, inferred from its URL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    /// `/reference/method/` pages, one per shell method
    Method,
    /// PyMongo driver documentation
    DriverPython,
    /// Atlas documentation
    Atlas,
    /// Anything else
    Article,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Method => "method",
            DocType::DriverPython => "driver_python",
            DocType::Atlas => "atlas",
            DocType::Article => "article",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured documentation page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrapedDocument {
    /// URL the page was fetched from
    pub url: String,

    pub doc_type: DocType,

    /// Method name, only for `DocType::Method`
    pub method_name: Option<String>,

    /// Page title, "Untitled" when none is found
    pub title: String,

    /// Version-like breadcrumb entry, e.g. "MongoDB Manual v8.0"
    pub version: Option<String>,

    /// Breadcrumb trail in first-seen order, without repeats
    pub breadcrumbs: Vec<String>,

    pub sections: Vec<Section>,

    /// Capture time of the scrape
    pub fetched_at: DateTime<Utc>,
}

/// A level-2 heading and everything under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub section_id: String,
    pub heading: String,
    pub heading_level: u8,
    pub content: String,
    pub code_blocks: Vec<String>,
    pub subsections: Vec<Subsection>,
}

impl Section {
    pub const LEVEL: u8 = 2;

    /// Create an empty section for a heading.
    pub fn new(heading: impl Into<String>) -> Self {
        let heading = heading.into();
        Self {
            section_id: slugify(&heading),
            heading,
            heading_level: Self::LEVEL,
            content: String::new(),
            code_blocks: Vec::new(),
            subsections: Vec::new(),
        }
    }
}

/// A level-3 heading nested under a section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subsection {
    pub subsection_id: String,
    pub heading: String,
    pub heading_level: u8,
    pub content: String,
    pub code_blocks: Vec<String>,
}

impl Subsection {
    pub const LEVEL: u8 = 3;

    /// Create an empty subsection for a heading.
    pub fn new(heading: impl Into<String>) -> Self {
        let heading = heading.into();
        Self {
            subsection_id: slugify(&heading),
            heading,
            heading_level: Self::LEVEL,
            content: String::new(),
            code_blocks: Vec::new(),
        }
    }
}

/// Heading slug: lowercase, spaces replaced with hyphens.
///
/// Slugs are not made unique; two identical headings share an id.
pub fn slugify(heading: &str) -> String {
    heading.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Insert a Document"), "insert-a-document");
        assert_eq!(slugify("Definition"), "definition");
    }

    #[test]
    fn test_doc_type_serializes_snake_case() {
        let json = serde_json::to_string(&DocType::DriverPython).unwrap();
        assert_eq!(json, "\"driver_python\"");
        assert_eq!(DocType::Method.to_string(), "method");
    }

    #[test]
    fn test_section_levels() {
        let section = Section::new("Write Concern");
        assert_eq!(section.section_id, "write-concern");
        assert_eq!(section.heading_level, 2);

        let sub = Subsection::new("Example");
        assert_eq!(sub.subsection_id, "example");
        assert_eq!(sub.heading_level, 3);
    }
}
