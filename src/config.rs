//! Run configuration: an optional YAML file layered under CLI overrides.
//!
//! Every section carries `#[serde(default)]`, so a config file only needs the
//! keys it changes. With no file at all the defaults scrape the ISPT heat
//! projects with the stock keyword set.
//!
//! ```yaml
//! listing_url: https://ispt.eu/projects/?theme-tag=heat
//! keywords: [heat, thermal, storage]
//! http:
//!   timeout_secs: 20
//!   detail_concurrency: 4
//! summary:
//!   max_length: 100
//! ```

use crate::cli::Cli;
use crate::error::ScrapeError;
use itertools::Itertools;
use scraper::Selector;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument};

pub const DEFAULT_LISTING_URL: &str = "https://ispt.eu/projects/?theme-tag=heat";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub listing_url: String,
    pub keywords: Vec<String>,
    pub http: HttpConfig,
    pub selectors: SelectorConfig,
    pub summary: SummaryConfig,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            keywords: ["heat", "thermal", "thermo", "energy", "storage"]
                .into_iter()
                .map(String::from)
                .collect(),
            http: HttpConfig::default(),
            selectors: SelectorConfig::default(),
            summary: SummaryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Detail pages fetched at once; 1 fetches cards strictly one by one.
    pub detail_concurrency: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 30,
            detail_concurrency: 8,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// CSS selectors for the two page shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub card: String,
    pub title: String,
    pub link: String,
    pub content: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card: "article.post-block.project".to_string(),
            title: "h2.entry-title".to_string(),
            link: "a.post-block-wrapper".to_string(),
            content: "div.entry-content".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub max_length: usize,
    pub min_length: usize,
    /// Texts with fewer words than this are returned unsummarized.
    pub pass_through_words: usize,
    pub concurrency: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            pass_through_words: crate::summarize::PASS_THROUGH_WORDS,
            concurrency: 4,
        }
    }
}

/// [`SelectorConfig`] compiled once at startup.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub card: Selector,
    pub title: Selector,
    pub link: Selector,
    pub content: Selector,
}

impl Selectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            card: compile_one(&config.card)?,
            title: compile_one(&config.title)?,
            link: compile_one(&config.link)?,
            content: compile_one(&config.content)?,
        })
    }
}

#[cfg(test)]
impl Default for Selectors {
    fn default() -> Self {
        Self::compile(&SelectorConfig::default()).unwrap()
    }
}

fn compile_one(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Trim keywords, drop empty ones and dedupe case-insensitively, keeping
/// first-seen order.
pub fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.as_ref().trim())
        .filter(|k| !k.is_empty())
        .unique_by(|k| k.to_lowercase())
        .map(String::from)
        .collect()
}

impl ScoutConfig {
    /// Parse a YAML document.
    pub fn from_yaml(path: &str, yaml: &str) -> Result<Self, ScrapeError> {
        serde_yaml::from_str(yaml).map_err(|e| ScrapeError::Config {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Read the optional config file, apply CLI overrides and validate.
    #[instrument(level = "info", skip_all)]
    pub async fn load(cli: &Cli) -> Result<Self, ScrapeError> {
        let mut config = match &cli.config {
            Some(path) => {
                let yaml = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| ScrapeError::Config {
                        path: path.clone(),
                        message: e.to_string(),
                    })?;
                info!(%path, "Loaded scout configuration");
                Self::from_yaml(path, &yaml)?
            }
            None => Self::default(),
        };

        if let Some(url) = &cli.url {
            config.listing_url = url.clone();
        }
        if !cli.keywords.is_empty() {
            config.keywords = cli.keywords.clone();
        }
        config.keywords = normalize_keywords(&config.keywords);

        config.validate(cli.config.as_deref().unwrap_or("<defaults>"))?;
        Ok(config)
    }

    pub fn validate(&self, path: &str) -> Result<(), ScrapeError> {
        let invalid = |message: &str| ScrapeError::Config {
            path: path.to_string(),
            message: message.to_string(),
        };

        if self.http.user_agent.trim().is_empty() {
            return Err(invalid("http.user_agent must not be empty"));
        }
        if self.http.detail_concurrency == 0 || self.summary.concurrency == 0 {
            return Err(invalid("concurrency must be at least 1"));
        }
        if self.summary.min_length > self.summary.max_length {
            return Err(invalid("summary.min_length exceeds summary.max_length"));
        }
        if url::Url::parse(&self.listing_url).is_err() {
            return Err(invalid("listing_url is not an absolute URL"));
        }
        Ok(())
    }
}
