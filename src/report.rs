// src/report.rs
// =============================================================================
// The result of a crawl and the two ways of printing it.
//
// Table layout (the default):
//
//   Site:                    Link:
//   https://example.test/    https://example.test/missing
//
// Both columns start at the same offset: the longest site plus one space.
// =============================================================================

use serde::Serialize;

use crate::crawl::DeadLink;

// Dead links of one referring page
#[derive(Debug, Clone, Serialize)]
pub struct SiteDeadLinks {
    /// The page the links were found on
    pub site: String,
    /// Targets that failed to load, in the order the failures were seen
    pub links: Vec<DeadLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeadLinkReport {
    pub seed: String,
    /// Number of distinct URLs claimed and fetched
    pub pages_checked: usize,
    pub dead_links: Vec<SiteDeadLinks>,
}

impl DeadLinkReport {
    pub fn is_clean(&self) -> bool {
        self.dead_links.is_empty()
    }

    pub fn total_dead(&self) -> usize {
        self.dead_links.iter().map(|s| s.links.len()).sum()
    }

    pub fn render_table(&self) -> String {
        if self.is_clean() {
            return "No dead links found!\n".to_string();
        }

        let width = self
            .dead_links
            .iter()
            .map(|s| s.site.len())
            .max()
            .unwrap_or(0)
            + 1;

        let mut out = format!("{:<width$}{}\n", "Site:", "Link:", width = width);
        for entry in &self.dead_links {
            for link in &entry.links {
                out.push_str(&format!("{:<width$}{}\n", entry.site, link.url, width = width));
            }
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
