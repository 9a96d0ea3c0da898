// src/crawl/orchestrator.rs
// =============================================================================
// This module drives the crawl.
//
// How it works:
// 1. crawl(referrer, target) claims `target` in the visited set; if someone
//    else already claimed it, there is nothing to do
// 2. A claimed URL gets its own tokio task, and the caller moves on
// 3. The task fetches the page; any failure is recorded as a dead link
//    under `referrer` and the task ends
// 4. If the page is inside the site (its URL contains the seed URL), every
//    link on it goes through crawl(page, link), spawning more tasks
// 5. run() waits until every task, transitively, has finished
//
// There is no cap on the number of tasks. The visited set stops a URL from
// being crawled twice; nothing limits how wide the crawl fans out.
//
// Completion tracking: every task holds a clone of an mpsc Sender. The
// receiver yields None only after the last Sender has been dropped, which
// makes it a wait-group over the whole task tree.
// =============================================================================

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use url::Url;

use super::registry::{DeadLink, DeadLinkRegistry};
use super::visited::VisitedSet;
use super::CrawlConfig;
use crate::checker::{extract_links, Fetcher};
use crate::error::{CrawlError, Result};
use crate::report::DeadLinkReport;

// A crawl of one site, from one seed URL
pub struct Crawler {
    seed: String,
    fetcher: Fetcher,
    visited: Arc<VisitedSet>,
    registry: Arc<DeadLinkRegistry>,
}

impl Crawler {
    // Fails if the seed is not an absolute URL or the HTTP client cannot be built
    pub fn new(seed: &str, config: &CrawlConfig) -> Result<Self> {
        Url::parse(seed).map_err(|e| CrawlError::malformed(seed, e))?;

        Ok(Self {
            seed: seed.to_string(),
            fetcher: Fetcher::new(config)?,
            visited: Arc::new(VisitedSet::new()),
            registry: Arc::new(DeadLinkRegistry::new()),
        })
    }

    // Crawls the whole site and returns every dead link found
    //
    // The seed is entered as both referrer and target, so a dead seed shows
    // up as a dead link of itself.
    pub async fn run(self) -> DeadLinkReport {
        info!(timeout = ?self.fetcher.timeout(), "Crawling: '{}'", self.seed);

        let (in_flight, mut all_done) = mpsc::channel::<()>(1);
        let unit = CrawlUnit {
            seed: Arc::from(self.seed.as_str()),
            fetcher: self.fetcher.clone(),
            visited: Arc::clone(&self.visited),
            registry: Arc::clone(&self.registry),
            _in_flight: in_flight,
        };
        unit.crawl(self.seed.clone(), self.seed.clone());
        drop(unit);

        // Nothing is ever sent; this returns None once all tasks are gone
        let _ = all_done.recv().await;

        let report = self.registry.report(&self.seed, self.visited.len());
        info!(
            pages_checked = report.pages_checked,
            dead_links = report.total_dead(),
            "Crawl finished"
        );
        report
    }
}

// Everything a crawl task needs, handed to each task explicitly
#[derive(Clone)]
struct CrawlUnit {
    seed: Arc<str>,
    fetcher: Fetcher,
    visited: Arc<VisitedSet>,
    registry: Arc<DeadLinkRegistry>,
    _in_flight: mpsc::Sender<()>,
}

impl CrawlUnit {
    fn crawl(&self, referrer: String, target: String) {
        if !self.visited.try_claim(&target) {
            return;
        }

        info!("Checking '{}' for dead links..", target);

        let unit = self.clone();
        tokio::spawn(unit.visit(referrer, target));
    }

    async fn visit(self, referrer: String, target: String) {
        let body = match self.fetcher.fetch(&target).await {
            Ok(body) => body,
            Err(e) => {
                warn!(referrer = %referrer, error = %e, "Error fetching URL '{}'", target);
                self.registry.record_dead(
                    &referrer,
                    DeadLink {
                        url: target,
                        cause: e.to_string(),
                    },
                );
                return;
            }
        };

        // The scope test looks at this page, not at the individual links, so
        // an off-site page stops at its first link: none of them are followed.
        if !self.in_scope(&target) {
            debug!(url = %target, "outside the seed site, not following its links");
            return;
        }

        for link in extract_links(&body, &target) {
            self.crawl(target.clone(), link);
        }
    }

    fn in_scope(&self, url: &str) -> bool {
        url.contains(&*self.seed)
    }
}
