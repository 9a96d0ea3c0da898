// src/checker/http.rs
// =============================================================================
// This module fetches pages over HTTP with a bounded wait.
//
// Key functionality:
// - Issues a plain GET (we need the body to find more links)
// - Bounds the whole exchange (headers + body) with a timeout
// - Classifies every non-success outcome as an error the crawler records
//   as a dead link: HTTP status >= 400, transport failure, or timeout
//
// There are no retries. A failure is reported once and the crawl moves on.
// =============================================================================

use reqwest::Client;
use std::time::Duration;

use crate::crawl::CrawlConfig;
use crate::error::{CrawlError, Result};

// Statuses from here on count as dead links
const FIRST_ERROR_STATUS: u16 = 400;

// Shared HTTP client plus the per-fetch timeout
//
// Cloning is cheap: reqwest's Client is a reference-counted connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        // No client-level timeout: fetch() bounds the whole operation itself
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // Fetches `url` and returns the page body as text
    //
    // Errors:
    //   Timeout      - nothing complete arrived within the timeout; the
    //                  in-flight request is dropped (and thereby cancelled)
    //   HttpStatus   - the server answered with status >= 400
    //   Transport    - DNS / connect / TLS / unsupported scheme / body read failure
    pub async fn fetch(&self, url: &str) -> Result<String> {
        match tokio::time::timeout(self.timeout, self.get_body(url)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(CrawlError::Timeout(self.timeout)),
        }
    }

    async fn get_body(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        if status >= FIRST_ERROR_STATUS {
            return Err(CrawlError::HttpStatus(status));
        }

        // A body that cannot be read fully surfaces as a Transport error
        Ok(response.text().await?)
    }
}
