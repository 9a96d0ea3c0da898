// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Install the log subscriber (progress goes to stderr)
// 3. Crawl the site and collect dead links
// 4. Print the report (table or JSON) to stdout
// 5. Exit with proper code (0 = no dead links, 1 = dead links, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl runs as many tokio tasks at once
// - Result<T, E> and the ? operator: Startup errors bubble up to main()
// - anyhow::Context: Adds "cannot crawl '<url>'" in front of the cause
// =============================================================================

mod checker; // src/checker/ - URL resolution, link extraction, bounded fetching
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - the concurrent crawl engine
mod error; // src/error.rs - crawl error types
mod report; // src/report.rs - report model and rendering

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crawl::Crawler;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no dead links
//   Ok(1) = dead links found
//   Err   = the crawl could not start
async fn run() -> Result<i32> {
    // A missing URL makes clap print the usage and exit before we get here
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let crawler = Crawler::new(&cli.url, &cli.crawl_config())
        .with_context(|| format!("cannot crawl '{}'", cli.url))?;
    let report = crawler.run().await;

    if cli.json {
        println!("{}", report.render_json()?);
    } else {
        print!("{}", report.render_table());
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

// Logs go to stderr so that stdout only carries the report
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dead_link_crawler={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why print logs to stderr?
//    - stdout carries the report, so `dead-link-crawler --json URL > out.json`
//      gives clean JSON
//    - Progress lines ("Checking '...' for dead links..") go to the terminal
//
// 2. What is EnvFilter?
//    - It decides which log lines are shown
//    - RUST_LOG=debug shows everything at debug level and above
//    - Without RUST_LOG we build a filter from the -v count
//
// 3. Why {:#} when printing the error?
//    - The alternate format prints the context and its causes on one line,
//      starting with "cannot crawl '<url>'"
// -----------------------------------------------------------------------------
