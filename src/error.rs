//! Typed failures surfaced by the scraping pipeline.
//!
//! Only conditions that abort a run live here. Per-record problems (a detail
//! page returning 404, a card without a title) never become errors; they are
//! recorded as sentinel text on the [`ProjectRecord`](crate::models::ProjectRecord).

use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The listing page answered with a non-success status.
    #[error("failed to retrieve data from {url}: status code {status}")]
    ListingStatus { url: String, status: u16 },

    /// The HTTP client could not complete the request (DNS, TLS, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// The HTTP client could not be constructed from the configured settings.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A configured CSS selector does not parse.
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    /// The config file could not be read or is semantically invalid.
    #[error("invalid configuration {path}: {message}")]
    Config { path: String, message: String },
}

impl ScrapeError {
    /// Whether this error came from the listing request itself.
    pub fn is_listing_failure(&self) -> bool {
        matches!(self, Self::ListingStatus { .. } | Self::Transport { .. })
    }
}
