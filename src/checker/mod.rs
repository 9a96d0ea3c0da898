// src/checker/mod.rs
// =============================================================================
// Leaf capabilities used by the crawl engine.
//
// Submodules:
// - resolve: Resolves hrefs against the page they were found on
// - html: Extracts anchor links from HTML pages
// - http: Fetches pages with a bounded wait and classifies failures
//
// None of these hold crawl state; the crawl module wires them together.
//
// Rust concepts:
// - Modules: One file per capability
// - pub use: Re-exports keep callers at `checker::extract_links`
// =============================================================================

mod html;
mod http;
mod resolve;

pub use html::extract_links;
pub use http::Fetcher;

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `resolve` not re-exported?
//    - Only html.rs resolves hrefs, so it stays private to this module
//    - `use super::resolve::resolve` reaches it from the sibling file
//
// 2. Why are these plain functions and a small struct?
//    - extract_links and resolve have no state, so functions are enough
//    - Fetcher holds the HTTP client, which should be built once and shared
// -----------------------------------------------------------------------------
