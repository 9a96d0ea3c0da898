// src/crawl/registry.rs
// =============================================================================
// Dead links grouped by the page that refers to them.
//
// Crawl tasks append concurrently; each append holds the entry's shard lock,
// so no entry is ever lost. Within one referrer, links appear in the order
// their fetches failed (network completion order, not page order).
//
// The registry is only read once every crawl task has finished.
// =============================================================================

use dashmap::DashMap;
use serde::Serialize;

use crate::report::{DeadLinkReport, SiteDeadLinks};

// A target that failed to load, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadLink {
    pub url: String,
    pub cause: String,
}

#[derive(Debug, Default)]
pub struct DeadLinkRegistry {
    by_referrer: DashMap<String, Vec<DeadLink>>,
}

impl DeadLinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends `link` to the list for `referrer`, creating the list if needed
    pub fn record_dead(&self, referrer: &str, link: DeadLink) {
        self.by_referrer
            .entry(referrer.to_string())
            .or_default()
            .push(link);
    }

    // Snapshot of the registry, sites sorted so output is stable between runs
    pub fn report(&self, seed: &str, pages_checked: usize) -> DeadLinkReport {
        let mut dead_links: Vec<SiteDeadLinks> = self
            .by_referrer
            .iter()
            .map(|entry| SiteDeadLinks {
                site: entry.key().clone(),
                links: entry.value().clone(),
            })
            .collect();
        dead_links.sort_by(|a, b| a.site.cmp(&b.site));

        DeadLinkReport {
            seed: seed.to_string(),
            pages_checked,
            dead_links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn dead(url: &str) -> DeadLink {
        DeadLink {
            url: url.to_string(),
            cause: "HTTP status 404".to_string(),
        }
    }

    #[test]
    fn test_appends_in_call_order() {
        let registry = DeadLinkRegistry::new();
        registry.record_dead("https://a.com/", dead("https://a.com/2"));
        registry.record_dead("https://a.com/", dead("https://a.com/1"));
        registry.record_dead("https://a.com/x", dead("https://b.com/"));

        let report = registry.report("https://a.com/", 3);
        assert_eq!(report.dead_links.len(), 2);
        assert_eq!(report.dead_links[0].site, "https://a.com/");
        let urls: Vec<_> = report.dead_links[0].links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.com/2", "https://a.com/1"]);
        assert_eq!(report.dead_links[1].site, "https://a.com/x");
        assert_eq!(report.total_dead(), 3);
    }

    #[test]
    fn test_empty_registry_reports_nothing() {
        let report = DeadLinkRegistry::new().report("https://a.com/", 1);
        assert!(report.is_clean());
        assert_eq!(report.pages_checked, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let registry = Arc::new(DeadLinkRegistry::new());

        let tasks = (0..16).map(|task| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                for i in 0..25 {
                    registry.record_dead(
                        "https://a.com/",
                        dead(&format!("https://a.com/{}/{}", task, i)),
                    );
                    tokio::task::yield_now().await;
                }
            })
        });
        for result in futures::future::join_all(tasks).await {
            result.unwrap();
        }

        let report = registry.report("https://a.com/", 1);
        assert_eq!(report.dead_links.len(), 1);
        assert_eq!(report.dead_links[0].links.len(), 16 * 25);
    }
}
