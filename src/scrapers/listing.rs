//! Project listing page scraper.
//!
//! The listing is the only request whose failure is fatal. Each card yields a
//! title and an optional detail link; detail pages are then fetched with a
//! bounded fan-out that hands results back in card order.

use super::detail::fetch_detail;
use crate::config::Selectors;
use crate::error::ScrapeError;
use crate::http::HttpFetch;
use crate::models::{NO_DESCRIPTION, NO_TITLE, ProjectRecord};
use futures::stream::{self, StreamExt};
use scraper::{ElementRef, Html};
use tracing::{debug, info, instrument};
use url::Url;

/// Title and detail link read from one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub link: Option<String>,
}

/// Scrape the listing at `url` into one record per card, in document order.
///
/// # Errors
///
/// [`ScrapeError::ListingStatus`] on a non-200 answer and
/// [`ScrapeError::Transport`] when the request itself fails.
#[instrument(level = "info", skip(http, selectors))]
pub async fn extract_listing<H: HttpFetch>(
    http: &H,
    selectors: &Selectors,
    url: &str,
    concurrency: usize,
) -> Result<Vec<ProjectRecord>, ScrapeError> {
    let response = http.get(url).await?;
    if !response.is_ok() {
        return Err(ScrapeError::ListingStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    let cards = parse_cards(&response.body, selectors, url);
    info!(count = cards.len(), "Indexed project cards");

    let records: Vec<ProjectRecord> = stream::iter(cards)
        .map(|card| async move {
            let description = match &card.link {
                Some(link) => fetch_detail(http, selectors, link).await,
                None => {
                    debug!(title = %card.title, "Card has no detail link");
                    NO_DESCRIPTION.to_string()
                }
            };
            ProjectRecord::new(card.title, description, card.link)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    info!(count = records.len(), "Fetched project descriptions");
    Ok(records)
}

/// Read every card on a listing page. Relative links are resolved against
/// `base_url`; an empty or blank `href` counts as no link.
pub fn parse_cards(body: &str, selectors: &Selectors, base_url: &str) -> Vec<Card> {
    let document = Html::parse_document(body);
    let base = Url::parse(base_url).ok();

    document
        .select(&selectors.card)
        .map(|card| {
            let title = card
                .select(&selectors.title)
                .next()
                .map(stripped_text)
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_TITLE.to_string());

            let link = card
                .select(&selectors.link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::trim)
                .filter(|href| !href.is_empty())
                .map(|href| resolve(base.as_ref(), href));

            Card { title, link }
        })
        .collect()
}

fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

fn resolve(base: Option<&Url>, href: &str) -> String {
    base.and_then(|b| b.join(href).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| href.to_string())
}
