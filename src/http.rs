//! HTTP transport used by the scrapers.
//!
//! Scrapers only see the [`HttpFetch`] trait: a GET that yields a status code
//! and a body. [`ReqwestFetcher`] is the production client; tests substitute
//! an in-memory map.

use crate::error::ScrapeError;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Status code and body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// A GET-by-URL capability.
///
/// Implementations must send an identifying user agent; the target sites
/// reject requests carrying an empty or library-default one.
pub trait HttpFetch {
    /// Fetch `url`. Non-success statuses are returned, not raised; only
    /// transport faults become [`ScrapeError::Transport`].
    async fn get(&self, url: &str) -> Result<HttpResponse, ScrapeError>;
}

/// [`HttpFetch`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Build a client with a fixed user agent and per-request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl HttpFetch for ReqwestFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn get(&self, url: &str) -> Result<HttpResponse, ScrapeError> {
        let t0 = Instant::now();
        let transport = |e: reqwest::Error| ScrapeError::Transport {
            url: url.to_string(),
            source: Box::new(e),
        };

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(elapsed_ms = t0.elapsed().as_millis() as u64, error = %e, "GET failed");
            transport(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;

        debug!(
            status,
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "GET completed"
        );
        Ok(HttpResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StaticFetcher;
    use super::*;

    #[test]
    fn test_response_is_ok_only_for_200() {
        let ok = HttpResponse { status: 200, body: String::new() };
        let created = HttpResponse { status: 201, body: String::new() };
        let missing = HttpResponse { status: 404, body: String::new() };
        assert!(ok.is_ok());
        assert!(!created.is_ok());
        assert!(!missing.is_ok());
    }

    #[test]
    fn test_reqwest_fetcher_builds() {
        assert!(ReqwestFetcher::new("Mozilla/5.0", Duration::from_secs(30)).is_ok());
    }

    #[test]
    fn test_invalid_user_agent_is_client_error() {
        let err = ReqwestFetcher::new("bad\nagent", Duration::from_secs(30)).unwrap_err();
        assert!(matches!(err, ScrapeError::Client(_)));
        assert!(!err.is_listing_failure());
    }

    #[tokio::test]
    async fn test_static_fetcher_unknown_url_is_transport_error() {
        let fetcher = StaticFetcher::new().page("https://a.test/", 200, "ok");
        assert_eq!(fetcher.get("https://a.test/").await.unwrap().body, "ok");
        let err = fetcher.get("https://b.test/").await.unwrap_err();
        assert!(matches!(err, ScrapeError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_static_fetcher_delay() {
        let fetcher = StaticFetcher::new()
            .page("https://a.test/", 200, "ok")
            .delay("https://a.test/", Duration::from_millis(30));
        let t0 = Instant::now();
        fetcher.get("https://a.test/").await.unwrap();
        assert!(t0.elapsed() >= Duration::from_millis(30));
    }
}
