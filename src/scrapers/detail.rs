//! Project detail page fetcher.
//!
//! Every failure on this path degrades to a sentinel description; one broken
//! detail page never aborts the run.

use super::cleaner::clean;
use crate::config::Selectors;
use crate::http::HttpFetch;
use crate::models::{DETAIL_NOT_FOUND, DETAIL_UNAVAILABLE};
use scraper::Html;
use tracing::{debug, instrument, warn};

/// Fetch a detail page and return its cleaned description.
///
/// # Returns
///
/// - the cleaned content text on success
/// - [`DETAIL_UNAVAILABLE`] on a non-200 status or transport failure
/// - [`DETAIL_NOT_FOUND`] when the page has no content container
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_detail<H: HttpFetch>(http: &H, selectors: &Selectors, url: &str) -> String {
    let response = match http.get(url).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Detail request failed");
            return DETAIL_UNAVAILABLE.to_string();
        }
    };

    if !response.is_ok() {
        warn!(status = response.status, "Detail page returned non-success status");
        return DETAIL_UNAVAILABLE.to_string();
    }

    let document = Html::parse_document(&response.body);
    let Some(content) = document.select(&selectors.content).next() else {
        warn!("Detail page has no content container");
        return DETAIL_NOT_FOUND.to_string();
    };

    let text = clean(content);
    debug!(chars = text.len(), "Parsed detail page");
    text
}
