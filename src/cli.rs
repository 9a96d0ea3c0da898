// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI is described by a struct, and each field
// becomes an argument. Flags can also be set from environment variables
// (the `env = ...` attributes), which is handy in CI.
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Doc comments (///): clap turns them into --help text
// - impl blocks: crawl_config() converts raw flags into engine settings
// =============================================================================

use clap::{ArgAction, Parser};

use crate::crawl::{CrawlConfig, DEFAULT_USER_AGENT};

#[derive(Parser, Debug)]
#[command(
    name = "dead-link-crawler",
    version,
    about = "Crawls a website and reports every link that fails to load",
    long_about = "dead-link-crawler starts at a seed URL, follows every link on pages whose URL \
                  contains the seed, and checks every link it finds (internal or external). \
                  Links that time out, fail to connect or answer with HTTP 400 or above are \
                  reported together with the page that links to them."
)]
pub struct Cli {
    /// Seed URL (e.g., https://example.com/)
    ///
    /// Pages whose URL contains this string are crawled; everything else is
    /// only checked for liveness
    pub url: String,

    /// Seconds to wait for each page before counting it as dead
    #[arg(long, env = "CRAWL_TIMEOUT_SECS", default_value_t = 5)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "CRAWL_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            timeout: std::time::Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `url` a positional argument?
//    - Fields without #[arg(long)] are positional and required
//    - Running the tool without a URL prints the usage and exits with code 2
//
// 2. What does ArgAction::Count do?
//    - Each -v adds one: -v = 1, -vv = 2
//    - The field type is u8 because nobody types -v 256 times
//
// 3. Why u64 seconds instead of Duration?
//    - clap parses plain numbers out of the box
//    - crawl_config() turns them into a Duration for the fetcher
// -----------------------------------------------------------------------------
