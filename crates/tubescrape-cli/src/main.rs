//! tubescrape command-line front end
//!
//! Scrapes the homepage feed, or the search results for `--query=<text>`,
//! and prints the listings grouped by section. Any failure is logged and
//! ends the run with status -1.

mod cli;

use cli::Args;
use tubescrape_core::{TubeScraper, display_limit, fatal, init_logger, print_report};

const FATAL_EXIT_CODE: i32 = -1;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let log_config = args.log_config();
    init_logger(log_config);
    if log_config.debug_enabled() {
        log::debug!(target: "main", "debug output enabled");
    }
    if log_config.verbose {
        log::debug!(target: "main", "verbose output enabled");
    }
    log::trace!(target: "main", "args={:?}", args);

    let scraper = TubeScraper::new().unwrap_or_else(|e| fatal("main", e, FATAL_EXIT_CODE));

    let results = match args.query.as_deref() {
        Some(query) => scraper
            .scrape_query(query)
            .await
            .unwrap_or_else(|e| fatal("scrape_query_results", e, FATAL_EXIT_CODE)),
        None => scraper
            .scrape_homepage()
            .await
            .unwrap_or_else(|e| fatal("scrape_homepage", e, FATAL_EXIT_CODE)),
    };

    if let Err(e) = print_report(&results, display_limit(log_config.verbose)) {
        fatal("show_results", e, FATAL_EXIT_CODE);
    }
}
