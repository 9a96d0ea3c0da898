// src/crawl/visited.rs
// =============================================================================
// The set of URLs already claimed for crawling.
//
// A claim is a single atomic check-and-insert, so when several crawl tasks
// discover the same URL at once exactly one of them gets to crawl it.
// Membership is permanent for the lifetime of the crawl.
// =============================================================================

use dashmap::DashSet;

#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: DashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns true if the caller now owns `url`, false if it was already claimed
    //
    // DashSet::insert takes the shard's write lock for the whole
    // check-and-insert, so two racing claims can never both succeed.
    pub fn try_claim(&self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}
