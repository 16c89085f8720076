//! Page classification from URL and breadcrumbs.

use crate::models::DocType;
use crate::utils::url::{last_segment, strip_query};

/// URL fragment → document type. Evaluated in order; first match wins.
const DOC_TYPE_RULES: &[(&str, DocType)] = &[
    ("/reference/method/", DocType::Method),
    ("/languages/python/", DocType::DriverPython),
    ("/atlas/", DocType::Atlas),
];

/// Infer the document type and, for method pages, the method name.
pub fn infer_doc_type_and_method(url: &str) -> (DocType, Option<String>) {
    let clean = strip_query(url);

    let doc_type = DOC_TYPE_RULES
        .iter()
        .find(|(pattern, _)| clean.contains(pattern))
        .map_or(DocType::Article, |(_, doc_type)| *doc_type);

    let method_name = match doc_type {
        DocType::Method => Some(last_segment(url).to_string()),
        _ => None,
    };

    (doc_type, method_name)
}

/// First breadcrumb that mentions "manual" and contains a digit.
pub fn infer_version(breadcrumbs: &[String]) -> Option<String> {
    breadcrumbs
        .iter()
        .find(|crumb| {
            crumb.to_lowercase().contains("manual") && crumb.chars().any(|c| c.is_ascii_digit())
        })
        .cloned()
}
