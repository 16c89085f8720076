// src/utils/url.rs

//! URL manipulation utilities.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that are not allowed in a file stub.
static UNSAFE_STUB_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/. ]").expect("stub pattern is valid"));

/// Drop the query string and any trailing slashes.
///
/// # Examples
/// ```
/// use docs_scraper::utils::url::strip_query;
///
/// assert_eq!(
///     strip_query("https://x/docs/manual/crud/?tab=shell"),
///     "https://x/docs/manual/crud"
/// );
/// ```
pub fn strip_query(url: &str) -> &str {
    let without_query = url.split_once('?').map_or(url, |(head, _)| head);
    without_query.trim_end_matches('/')
}

/// Last `/`-separated piece of a URL after `strip_query`.
pub fn last_segment(url: &str) -> &str {
    let clean = strip_query(url);
    clean.rsplit('/').next().unwrap_or(clean)
}

/// Last non-empty path segment of a URL, if the URL has a path.
///
/// # Examples
/// ```
/// use docs_scraper::utils::url::last_path_segment;
///
/// assert_eq!(
///     last_path_segment("https://x/docs/manual/indexes/"),
///     Some("indexes".to_string())
/// );
/// assert_eq!(last_path_segment("https://x/"), None);
/// ```
pub fn last_path_segment(url: &str) -> Option<String> {
    match url::Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()?
            .filter(|segment| !segment.is_empty())
            .last()
            .map(str::to_string),
        // Not an absolute URL; treat it as a bare path.
        Err(_) => {
            let segment = last_segment(url);
            (!segment.is_empty()).then(|| segment.to_string())
        }
    }
}

/// Make a stub safe for use in a file name.
///
/// Replaces `/`, `.`, and spaces with underscores.
pub fn sanitize_stub(stub: &str) -> String {
    UNSAFE_STUB_CHARS.replace_all(stub, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("https://x/a/b/"), "https://x/a/b");
        assert_eq!(strip_query("https://x/a/b//?q=1&r=2"), "https://x/a/b");
        assert_eq!(strip_query("https://x/a"), "https://x/a");
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(
            last_segment("https://x/docs/manual/reference/method/db.collection.insertOne/"),
            "db.collection.insertOne"
        );
    }

    #[test]
    fn test_last_path_segment_ignores_query() {
        assert_eq!(
            last_path_segment("https://x/docs/manual/crud/?tab=shell"),
            Some("crud".to_string())
        );
        assert_eq!(last_path_segment("https://x"), None);
    }

    #[test]
    fn test_last_path_segment_relative() {
        assert_eq!(last_path_segment("docs/manual/"), Some("manual".to_string()));
        assert_eq!(last_path_segment(""), None);
    }

    #[test]
    fn test_sanitize_stub() {
        assert_eq!(sanitize_stub("db.collection.insertOne"), "db_collection_insertOne");
        assert_eq!(sanitize_stub("d1_insert-one"), "d1_insert-one");
        assert_eq!(sanitize_stub("a/b c.d"), "a_b_c_d");
    }
}
