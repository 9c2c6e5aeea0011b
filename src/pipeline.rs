//! Pipeline orchestration: listing → classify → summarize.
//!
//! The run owns nothing global. The HTTP client and summarization model are
//! built by the caller and borrowed for the duration of [`run`].

use crate::api::SummaryModel;
use crate::classify::classify;
use crate::config::{ScoutConfig, Selectors};
use crate::error::ScrapeError;
use crate::http::HttpFetch;
use crate::models::{PipelineReport, SUMMARY_UNAVAILABLE, SummaryResult};
use crate::scrapers::listing::extract_listing;
use crate::summarize::summarize;
use futures::stream::{self, StreamExt};
use tracing::{error, info, instrument};

/// Run one scrape-classify-summarize pass over `config.listing_url`.
///
/// # Errors
///
/// Only listing failures are returned. A failed summary is logged and
/// replaced with [`SUMMARY_UNAVAILABLE`].
#[instrument(level = "info", skip_all, fields(url = %config.listing_url))]
pub async fn run<H: HttpFetch, M: SummaryModel>(
    http: &H,
    model: &M,
    selectors: &Selectors,
    config: &ScoutConfig,
) -> Result<PipelineReport, ScrapeError> {
    let records = extract_listing(
        http,
        selectors,
        &config.listing_url,
        config.http.detail_concurrency,
    )
    .await?;

    let records = classify(records, &config.keywords);

    let summary = &config.summary;
    let summaries: Vec<SummaryResult> = stream::iter(records.iter().filter(|r| r.is_relevant()))
        .map(|record| async move {
            let text = match summarize(
                model,
                &record.description,
                summary.max_length,
                summary.min_length,
                summary.pass_through_words,
            )
            .await
            {
                Ok(text) => text,
                Err(e) => {
                    error!(title = %record.title, error = %e, "Summarization failed; using placeholder");
                    SUMMARY_UNAVAILABLE.to_string()
                }
            };
            SummaryResult {
                title: record.title.clone(),
                summary: text,
            }
        })
        .buffered(summary.concurrency.max(1))
        .collect()
        .await;

    let report = PipelineReport {
        source_url: config.listing_url.clone(),
        records,
        summaries,
    };
    info!(
        total = report.total(),
        relevant = report.relevant_count(),
        summaries = report.summaries.len(),
        "Pipeline complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{FailingModel, FixedModel, SlowModel};
    use crate::http::testing::StaticFetcher;
    use crate::models::Relevance;
    use std::time::Duration;

    const LISTING: &str = "https://ispt.eu/projects/?theme-tag=heat";

    fn long_text(topic: &str) -> String {
        format!("{topic} project detail sentence ").repeat(15)
    }

    fn site(details: &[(&str, &str)]) -> StaticFetcher {
        let mut cards = String::new();
        let mut http = StaticFetcher::new();
        for (i, (title, body)) in details.iter().enumerate() {
            let href = format!("https://ispt.eu/projects/p{i}/");
            cards.push_str(&format!(
                r#"<article class="post-block project">
                     <a class="post-block-wrapper" href="{href}"><h2 class="entry-title">{title}</h2></a>
                   </article>"#
            ));
            http = http.page(
                &href,
                200,
                &format!(r#"<div class="entry-content"><p>{body}</p></div>"#),
            );
        }
        http.page(LISTING, 200, &format!("<html><body>{cards}</body></html>"))
    }

    fn config(keywords: &[&str]) -> ScoutConfig {
        ScoutConfig {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..ScoutConfig::default()
        }
    }

    #[tokio::test]
    async fn test_three_card_scenario() {
        let http = site(&[
            ("Heat Pump Pilot", long_text("pump").as_str()),
            ("Logistics App", "Route planning for trucks."),
            ("Thermal Storage Trial", "A short storage trial."),
        ]);
        let model = FixedModel::new("MODEL SUMMARY");

        let report = run(&http, &model, &Selectors::default(), &config(&["heat", "thermal"]))
            .await
            .unwrap();

        let relevance: Vec<_> = report.records.iter().map(|r| r.relevance.unwrap()).collect();
        assert_eq!(
            relevance,
            vec![Relevance::Relevant, Relevance::Irrelevant, Relevance::Relevant]
        );
        assert_eq!(report.total(), 3);
        assert_eq!(report.relevant_count(), 2);

        let titles: Vec<_> = report.summaries.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Heat Pump Pilot", "Thermal Storage Trial"]);
        // long description goes to the model, short one passes through
        assert_eq!(report.summaries[0].summary, "MODEL SUMMARY");
        assert_eq!(report.summaries[1].summary, "A short storage trial.");
        assert_eq!(model.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_summary_failure_is_isolated() {
        let http = site(&[
            ("Heat A", long_text("poison").as_str()),
            ("Heat B", long_text("fine").as_str()),
        ]);
        let model = FailingModel {
            poison: "poison".to_string(),
        };

        let report = run(&http, &model, &Selectors::default(), &config(&["heat"]))
            .await
            .unwrap();

        assert_eq!(report.relevant_count(), 2);
        assert_eq!(report.summaries.len(), 2);
        assert_eq!(report.summaries[0].summary, SUMMARY_UNAVAILABLE);
        assert!(report.summaries[1].summary.starts_with("summary of"));
    }

    #[tokio::test]
    async fn test_slow_early_summaries_keep_listing_order() {
        let topics = ["alpha", "beta", "gamma", "delta"];
        let texts: Vec<String> = topics.iter().map(|t| long_text(t)).collect();
        let titles: Vec<String> = topics.iter().map(|t| format!("Heat {t}")).collect();
        let details: Vec<(&str, &str)> = titles
            .iter()
            .zip(&texts)
            .map(|(title, text)| (title.as_str(), text.as_str()))
            .collect();
        let http = site(&details);
        // earlier records finish last
        let model = SlowModel {
            delays: topics
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    let delay = Duration::from_millis(25 * (topics.len() - i) as u64);
                    (t.to_string(), delay)
                })
                .collect(),
        };
        let mut config = config(&["heat"]);
        config.summary.concurrency = 4;

        let report = run(&http, &model, &Selectors::default(), &config).await.unwrap();

        let got: Vec<(&str, &str)> = report
            .summaries
            .iter()
            .map(|s| (s.title.as_str(), s.summary.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Heat alpha", "summary of alpha"),
                ("Heat beta", "summary of beta"),
                ("Heat gamma", "summary of gamma"),
                ("Heat delta", "summary of delta"),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_keywords_means_no_summaries() {
        let http = site(&[("Heat Pump Pilot", "heat")]);
        let model = FixedModel::new("unused");

        let report = run(&http, &model, &Selectors::default(), &config(&[]))
            .await
            .unwrap();

        assert_eq!(report.relevant_count(), 0);
        assert!(report.summaries.is_empty());
    }

    #[tokio::test]
    async fn test_listing_failure_aborts_run() {
        let http = StaticFetcher::new().page(LISTING, 500, "down");
        let model = FixedModel::new("unused");

        let err = run(&http, &model, &Selectors::default(), &config(&["heat"]))
            .await
            .unwrap_err();
        assert!(err.is_listing_failure());
    }
}
