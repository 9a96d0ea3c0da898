// src/error.rs
// =============================================================================
// Error types for the crawl engine.
//
// None of these abort a crawl once it has started. A malformed href is
// dropped, and every fetch failure turns into a dead-link entry for the page
// that referred to it. Only a malformed seed URL (or an HTTP client that
// cannot be built) stops the program before crawling begins.
// =============================================================================

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    /// A base URL or href could not be parsed or resolved
    #[error("malformed URL '{url}': {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The server answered with a status code >= 400
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// DNS, connection, TLS or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No complete response within the fetch timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl CrawlError {
    pub fn malformed(url: &str, source: url::ParseError) -> Self {
        CrawlError::MalformedUrl {
            url: url.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_cause() {
        assert_eq!(CrawlError::HttpStatus(404).to_string(), "HTTP status 404");
        assert_eq!(
            CrawlError::Timeout(Duration::from_secs(5)).to_string(),
            "request timed out after 5s"
        );

        let err = CrawlError::malformed("http://[::1", url::ParseError::InvalidIpv6Address);
        assert!(err.to_string().starts_with("malformed URL 'http://[::1'"));
    }
}
