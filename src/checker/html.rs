// src/checker/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM tree
// - Is built on html5ever, which never rejects a document: malformed markup
//   is repaired the same way a browser would, and the problems are reported
//   in `Html::errors` instead of failing the parse
//
// Every href is resolved to an absolute URL against the page it came from.
// =============================================================================

use scraper::Html;
use tracing::debug;

use super::resolve::resolve;

// Extracts all anchor links from HTML content
//
// Parameters:
//   html: the raw page text
//   base_url: the URL of the page (for resolving relative links)
//
// Returns the absolute URL of every <a> element's href, in document order.
// Hrefs that cannot be resolved are dropped. If the page URL itself does not
// parse, no href resolves and the page counts as having no links.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!(
            url = base_url,
            errors = document.errors.len(),
            "recovered from malformed HTML"
        );
    }

    // descendants() walks the tree depth-first in document order
    let mut links = Vec::new();
    for node in document.tree.root().descendants() {
        let Some(element) = node.value().as_element() else {
            continue;
        };
        if element.name() != "a" {
            continue;
        }
        // html5ever keeps only the first of duplicated attributes
        let Some(href) = element.attr("href") else {
            continue;
        };
        match resolve(base_url, href) {
            Ok(absolute_url) => links.push(absolute_url),
            Err(e) => debug!(page = base_url, error = %e, "dropping unresolvable href"),
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["https://www.rust-lang.org/"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let html = r#"<a href="/docs">Docs</a>"#;
        let links = extract_links(html, "https://example.com/page");
        assert_eq!(links, vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_document_order_across_nesting() {
        let html = r#"
            <nav><a href="/one">1</a><div><a href="/two">2</a></div></nav>
            <main><p><a href="../three">3</a></p></main>
            <a href="https://other.com/four">4</a>
        "#;
        let links = extract_links(html, "https://example.com/page/");
        assert_eq!(
            links,
            vec![
                "https://example.com/one",
                "https://example.com/two",
                "https://example.com/three",
                "https://other.com/four",
            ]
        );
    }

    #[test]
    fn test_keeps_non_http_schemes() {
        // mailto: and friends are still links; the fetcher decides they are dead
        let html = r#"<a href="mailto:test@example.com">Email</a>"#;
        let links = extract_links(html, "https://example.com");
        assert_eq!(links, vec!["mailto:test@example.com"]);
    }

    #[test]
    fn test_skips_anchors_without_href() {
        let html = r#"<a name="top">Top</a><a href="/x">X</a><link href="/style.css">"#;
        let links = extract_links(html, "https://example.com/");
        assert_eq!(links, vec!["https://example.com/x"]);
    }

    #[test]
    fn test_first_href_wins() {
        let html = r#"<a href="/first" href="/second">Dup</a>"#;
        let links = extract_links(html, "https://example.com/");
        assert_eq!(links, vec!["https://example.com/first"]);
    }

    #[test]
    fn test_drops_unresolvable_href() {
        let html = r#"<a href="http://[::1">Bad</a><a href="/good">Good</a>"#;
        let links = extract_links(html, "https://example.com/");
        assert_eq!(links, vec!["https://example.com/good"]);
    }

    #[test]
    fn test_malformed_markup_still_yields_links() {
        let html = r#"<div><p><a href="/a">a</a><span><p><a href=/b>b</td></table>"#;
        let links = extract_links(html, "https://example.com/");
        assert_eq!(
            links,
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[test]
    fn test_unparsable_page_url_gives_no_links() {
        let html = r#"<a href="/docs">Docs</a>"#;
        assert!(extract_links(html, "not a url").is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_links("", "https://example.com/").is_empty());
    }
}
