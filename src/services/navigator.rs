//! DOM navigation: main content container, title, and breadcrumb trail.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Main container candidates, highest priority first.
static MAIN_CANDIDATES: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    ["main", "article", r#"[role="main"]"#, "body"]
        .into_iter()
        .map(selector)
        .collect()
});

static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static CRUMB_ITEMS: LazyLock<Selector> = LazyLock::new(|| selector("li, span, a"));

/// One way of locating the breadcrumb container.
struct BreadcrumbStrategy {
    candidates: Selector,
    is_breadcrumb: fn(&ElementRef<'_>) -> bool,
}

/// Tried in order until one finds a container.
static BREADCRUMB_STRATEGIES: LazyLock<[BreadcrumbStrategy; 2]> = LazyLock::new(|| {
    [
        BreadcrumbStrategy {
            candidates: selector("nav"),
            is_breadcrumb: labelled_breadcrumb,
        },
        BreadcrumbStrategy {
            candidates: selector("ol, ul"),
            is_breadcrumb: classed_breadcrumb,
        },
    ]
});

fn mentions_breadcrumb(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains("breadcrumb"))
}

/// Navigation landmark whose label or class mentions "breadcrumb".
fn labelled_breadcrumb(el: &ElementRef<'_>) -> bool {
    let attrs = el.value();
    ["aria-label", "aria-labelledby", "class"]
        .into_iter()
        .any(|name| mentions_breadcrumb(attrs.attr(name)))
}

/// List whose class mentions "breadcrumb".
fn classed_breadcrumb(el: &ElementRef<'_>) -> bool {
    mentions_breadcrumb(el.value().attr("class"))
}

/// Text of an element: trimmed text nodes, empty ones dropped, joined by `sep`.
pub fn element_text(el: ElementRef<'_>, sep: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Locate the element holding the page's primary content.
///
/// Falls back to the document root, so this never fails.
pub fn find_main_container(document: &Html) -> ElementRef<'_> {
    MAIN_CANDIDATES
        .iter()
        .find_map(|sel| document.select(sel).next())
        .unwrap_or_else(|| document.root_element())
}

/// Page title: first `h1` in `main`, then anywhere, then `<title>`, then "Untitled".
pub fn extract_title(main: ElementRef<'_>, document: &Html) -> String {
    let non_empty = |el: ElementRef<'_>| Some(element_text(el, " ")).filter(|t| !t.is_empty());

    main.select(&H1)
        .next()
        .and_then(non_empty)
        .or_else(|| document.select(&H1).next().and_then(non_empty))
        .or_else(|| document.select(&TITLE).next().and_then(non_empty))
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Breadcrumb labels in document order, each kept only the first time it appears.
pub fn extract_breadcrumbs(document: &Html) -> Vec<String> {
    let container = BREADCRUMB_STRATEGIES.iter().find_map(|strategy| {
        document
            .select(&strategy.candidates)
            .find(|el| (strategy.is_breadcrumb)(el))
    });

    let Some(container) = container else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    container
        .select(&CRUMB_ITEMS)
        .map(|el| element_text(el, " "))
        .filter(|text| !text.is_empty())
        .filter(|text| seen.insert(text.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(el: ElementRef<'_>) -> String {
        el.value().name().to_string()
    }

    #[test]
    fn test_main_container_priority() {
        let doc = Html::parse_document(
            "<html><body><article><p>a</p></article><main><p>b</p></main></body></html>",
        );
        assert_eq!(name_of(find_main_container(&doc)), "main");

        let doc = Html::parse_document(
            r#"<html><body><div role="main"><p>a</p></div><article>b</article></body></html>"#,
        );
        assert_eq!(name_of(find_main_container(&doc)), "article");

        let doc = Html::parse_document(r#"<html><body><div role="main">a</div></body></html>"#);
        assert_eq!(find_main_container(&doc).value().attr("role"), Some("main"));
    }

    #[test]
    fn test_main_container_falls_back_to_body() {
        let doc = Html::parse_document("<p>bare</p>");
        assert_eq!(name_of(find_main_container(&doc)), "body");
    }

    #[test]
    fn test_title_prefers_main_h1() {
        let doc = Html::parse_document(
            "<html><head><title>Head</title></head><body>\
             <h1>Outside</h1><main><h1>  Inside  </h1></main></body></html>",
        );
        let main = find_main_container(&doc);
        assert_eq!(extract_title(main, &doc), "Inside");
    }

    #[test]
    fn test_title_fallbacks() {
        let doc = Html::parse_document(
            "<html><body><h1>Outside</h1><main><p>x</p></main></body></html>",
        );
        assert_eq!(extract_title(find_main_container(&doc), &doc), "Outside");

        let doc = Html::parse_document(
            "<html><head><title> Head Title </title></head><body><main></main></body></html>",
        );
        assert_eq!(extract_title(find_main_container(&doc), &doc), "Head Title");

        let doc = Html::parse_document("<html><body><main></main></body></html>");
        assert_eq!(extract_title(find_main_container(&doc), &doc), "Untitled");
    }

    #[test]
    fn test_breadcrumbs_from_labelled_nav() {
        let doc = Html::parse_document(
            r#"<nav class="site-nav"><a>Skip</a></nav>
               <nav aria-label="Breadcrumbs">
                 <ol>
                   <li><a href="/docs">Docs Home</a></li>
                   <li><a href="/docs/manual">MongoDB Manual v8.0</a></li>
                   <li><span>insertOne</span></li>
                 </ol>
               </nav>"#,
        );
        assert_eq!(
            extract_breadcrumbs(&doc),
            vec!["Docs Home", "MongoDB Manual v8.0", "insertOne"]
        );
    }

    #[test]
    fn test_breadcrumbs_from_classed_list() {
        let doc = Html::parse_document(
            r#"<ul class="menu"><li>Menu</li></ul>
               <ul class="Breadcrumb-trail"><li>Docs</li><li>Atlas</li></ul>"#,
        );
        assert_eq!(extract_breadcrumbs(&doc), vec!["Docs", "Atlas"]);
    }

    #[test]
    fn test_breadcrumbs_deduplicated_in_first_seen_order() {
        let doc = Html::parse_document(
            r#"<nav class="breadcrumbs">
                 <li><a>Docs</a></li><li><a>Docs</a></li><li><a>Manual</a></li>
               </nav>"#,
        );
        assert_eq!(extract_breadcrumbs(&doc), vec!["Docs", "Manual"]);
    }

    #[test]
    fn test_no_breadcrumbs() {
        let doc = Html::parse_document("<nav><a>Home</a></nav><ul><li>x</li></ul>");
        assert!(extract_breadcrumbs(&doc).is_empty());
    }
}
