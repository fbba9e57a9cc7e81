//! yt-search - run one YouTube Data API search and print the results.
//!
//! Main entry point. Always exits 0; failures are printed.

mod config;
mod invoker;
mod logging;
mod report;
mod youtube;

use config::Config;
use std::io::{self, Write};
use tracing::error;

/// Main application entry point.
///
/// # Details
/// Loads configuration, runs the search on a single-threaded runtime and
/// prints either the results or a diagnostic.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match Config::load(None) {
        Ok(config) => config,
        Err(e) => {
            logging::init_tracing("warn");
            error!("Failed to load configuration: {:#}", e);
            println!("Error occurred: {:#}", e);
            return;
        }
    };
    logging::init_tracing(&config.log_level);

    let outcome = invoker::execute(&config).await;
    if let Err(e) = &outcome {
        error!(error = %e, "Search failed");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = report::render_outcome(&outcome, &mut out).and_then(|_| out.flush()) {
        error!(error = %e, "Failed to write output");
    }
}
