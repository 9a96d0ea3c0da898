// src/checker/resolve.rs
// =============================================================================
// Resolves a possibly-relative href against the URL of the page it was found
// on, following standard URI reference resolution (RFC 3986) via `url::Url::join`.
//
// Handles:
// - relative paths          ("../y"       -> "https://a.com/y")
// - absolute paths          ("/z"         -> "https://a.com/z")
// - protocol-relative hrefs ("//c.com/q"  -> "https://c.com/q")
// - fragment-only hrefs     ("#top"       -> "https://a.com/x/#top")
// - already-absolute hrefs  (returned in their parsed form)
// =============================================================================

use url::Url;

use crate::error::{CrawlError, Result};

// Resolves `href` against `base` and returns the absolute URL string
//
// Fails with MalformedUrl when `base` does not parse as an absolute URL,
// or when `href` cannot be resolved against it.
pub fn resolve(base: &str, href: &str) -> Result<String> {
    let base_url = Url::parse(base).map_err(|e| CrawlError::malformed(base, e))?;
    base_url
        .join(href)
        .map(String::from)
        .map_err(|e| CrawlError::malformed(href, e))
}
