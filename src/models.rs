//! Data models for scraped projects and their derived summaries.
//!
//! - [`ProjectRecord`]: one project card plus its cleaned detail text
//! - [`Relevance`]: keyword classification outcome
//! - [`SummaryResult`]: condensed text for a relevant project
//! - [`PipelineReport`]: everything a run produced, in listing order

use std::fmt;

/// Title used when a card has no title heading.
pub const NO_TITLE: &str = "No title";
/// Description used when a card has no detail link.
pub const NO_DESCRIPTION: &str = "No description";
/// Description used when the detail page request fails or is not a 200.
pub const DETAIL_UNAVAILABLE: &str = "Could not retrieve detail page";
/// Description used when the detail page lacks a content container.
pub const DETAIL_NOT_FOUND: &str = "No detailed description found";
/// Summary used when the summarization model fails for a record.
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable";

/// Outcome of keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    Relevant,
    Irrelevant,
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relevance::Relevant => f.write_str("Relevant"),
            Relevance::Irrelevant => f.write_str("Irrelevant"),
        }
    }
}

/// A single project as scraped from the listing and detail pages.
///
/// `relevance` stays `None` until [`classify`](crate::classify::classify)
/// consumes the record and hands back a classified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Card heading text, or [`NO_TITLE`].
    pub title: String,
    /// Cleaned detail page text, or one of the description sentinels.
    pub description: String,
    /// Absolute detail page URL, if the card links to one.
    pub link: Option<String>,
    /// Set exactly once by the classifier.
    pub relevance: Option<Relevance>,
}

impl ProjectRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>, link: Option<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link,
            relevance: None,
        }
    }

    pub fn is_relevant(&self) -> bool {
        self.relevance == Some(Relevance::Relevant)
    }
}

/// Condensed text for one relevant project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub title: String,
    pub summary: String,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Listing page the run scraped.
    pub source_url: String,
    /// Classified records in listing order.
    pub records: Vec<ProjectRecord>,
    /// Summaries for relevant records, in listing order.
    pub summaries: Vec<SummaryResult>,
}

impl PipelineReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn relevant_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_relevant()).count()
    }
}
