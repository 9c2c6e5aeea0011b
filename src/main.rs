//! # Project Scout
//!
//! Scrapes project case studies from a listing page, cleans each project's
//! detail page, flags projects as relevant by keyword and summarizes the
//! relevant ones through an LLM.
//!
//! ## Usage
//!
//! ```sh
//! project_scout -k heat -k thermal
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Indexing**: Read project cards (title, detail link) from the listing page
//! 2. **Fetching**: Download and clean each detail page (bounded fan-out)
//! 3. **Classification**: Keyword match over title and description
//! 4. **Summarization**: LLM summary for relevant projects; short texts pass through
//! 5. **Output**: Plain-text report on stdout, logs on stderr

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod classify;
mod cli;
mod config;
mod error;
mod http;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod summarize;
mod utils;

use api::AwfulSummaryModel;
use cli::Cli;
use config::{ScoutConfig, Selectors};
use http::ReqwestFetcher;
use outputs::text::report_to_text;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("project_scout starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = ScoutConfig::load(&args).await?;
    let selectors = Selectors::compile(&config.selectors)?;
    info!(
        url = %config.listing_url,
        keywords = ?config.keywords,
        detail_concurrency = config.http.detail_concurrency,
        "Configuration ready"
    );

    let http = ReqwestFetcher::new(&config.http.user_agent, config.http.timeout())?;
    let model = AwfulSummaryModel::load(args.ai_config.as_deref(), &args.template).await?;

    let report = match pipeline::run(&http, &model, &selectors, &config).await {
        Ok(report) => report,
        Err(e) if e.is_listing_failure() => {
            error!(url = %config.listing_url, error = %e, "Listing page unavailable; aborting run");
            return Err(e.into());
        }
        Err(e) => {
            error!(error = %e, "Pipeline failed");
            return Err(e.into());
        }
    };

    print!("{}", report_to_text(&report));

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        projects = report.total(),
        relevant = report.relevant_count(),
        "Execution complete"
    );

    Ok(())
}
