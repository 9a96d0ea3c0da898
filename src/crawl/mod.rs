// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Recursive crawl from a seed URL, one task per page, no concurrency cap
// - Each URL is claimed (and therefore fetched) at most once
// - Pages whose URL contains the seed are followed; others are only checked
// - Failed fetches are recorded against the page that linked to them
//
// Submodules:
// - visited: the claim set
// - registry: dead links keyed by referring page
// - orchestrator: the task fan-out and the join barrier
//
// Rust concepts:
// - Arc: Shares the visited set and registry between tasks
// - DashSet / DashMap: Concurrent collections with per-shard locks
// - tokio::spawn: Runs each page in its own task
// =============================================================================

mod orchestrator;
mod registry;
mod visited;

use std::time::Duration;

pub use orchestrator::Crawler;
pub use registry::DeadLink;

// Every fetch gives up after this long unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_USER_AGENT: &str = concat!("dead-link-crawler/", env!("CARGO_PKG_VERSION"));

// Settings for a crawl run, built from the command line
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Upper bound on a single fetch (response headers and body)
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not a Mutex<HashSet> for visited URLs?
//    - One lock would serialise every task, even for unrelated URLs
//    - DashSet splits the set into shards, each with its own lock
//    - insert() still does check-and-insert atomically within a shard
//
// 2. Why does the crawl have no depth limit?
//    - The visited set already stops loops: a URL is only crawled once
//    - Pages outside the seed site are checked but never followed
//
// 3. What is `concat!(..., env!("CARGO_PKG_VERSION"))`?
//    - Both macros run at compile time
//    - The user agent always carries the version from Cargo.toml
// -----------------------------------------------------------------------------
