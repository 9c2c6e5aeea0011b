//! Keyword relevance classification.

use crate::models::{ProjectRecord, Relevance};
use tracing::{debug, info, instrument};

/// Tag every record as relevant or irrelevant.
///
/// A record is relevant when any keyword, compared case-insensitively, occurs
/// as a substring of `title + " " + description`. The output has the same
/// length and order as the input; an empty keyword list marks everything
/// irrelevant.
#[instrument(level = "info", skip_all, fields(records = records.len(), keywords = keywords.len()))]
pub fn classify<S: AsRef<str>>(records: Vec<ProjectRecord>, keywords: &[S]) -> Vec<ProjectRecord> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();

    let classified: Vec<ProjectRecord> = records
        .into_iter()
        .map(|mut record| {
            let haystack = format!("{} {}", record.title, record.description).to_lowercase();
            let matched = keywords.iter().find(|k| haystack.contains(k.as_str()));
            debug!(title = %record.title, keyword = ?matched, "Classified project");

            record.relevance = Some(if matched.is_some() {
                Relevance::Relevant
            } else {
                Relevance::Irrelevant
            });
            record
        })
        .collect();

    let relevant = classified.iter().filter(|r| r.is_relevant()).count();
    info!(relevant, total = classified.len(), "Classification complete");
    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, description: &str) -> ProjectRecord {
        ProjectRecord::new(title, description, None)
    }

    fn relevances(records: &[ProjectRecord]) -> Vec<Relevance> {
        records.iter().map(|r| r.relevance.unwrap()).collect()
    }

    #[test]
    fn test_matches_title_or_description_case_insensitively() {
        let records = vec![
            record("Heat Pump Pilot", "Industrial pilot."),
            record("Logistics App", "Route planning software."),
            record("Trial", "A THERMAL storage demonstrator."),
        ];
        let out = classify(records, &["heat", "Thermal"]);
        assert_eq!(
            relevances(&out),
            vec![Relevance::Relevant, Relevance::Irrelevant, Relevance::Relevant]
        );
    }

    #[test]
    fn test_preserves_length_and_order() {
        let records: Vec<_> = (0..10).map(|i| record(&format!("P{i}"), "x")).collect();
        let out = classify(records.clone(), &["p3"]);
        assert_eq!(out.len(), records.len());
        for (a, b) in out.iter().zip(&records) {
            assert_eq!(a.title, b.title);
        }
        assert!(out[3].is_relevant());
        assert_eq!(out.iter().filter(|r| r.is_relevant()).count(), 1);
    }

    #[test]
    fn test_empty_keywords_mark_everything_irrelevant() {
        let records = vec![record("Heat", "heat"), record("", "")];
        let out = classify(records, &[] as &[&str]);
        assert!(out.iter().all(|r| r.relevance == Some(Relevance::Irrelevant)));
    }

    #[test]
    fn test_match_may_span_title_and_description() {
        // "heat" + " " + "pump" joins into "heat pump"
        let out = classify(vec![record("Heat", "pump trial")], &["heat pump"]);
        assert!(out[0].is_relevant());
    }

    #[test]
    fn test_sentinel_descriptions_are_classified_too() {
        let out = classify(vec![record("Plant", "Could not retrieve detail page")], &["retrieve"]);
        assert!(out[0].is_relevant());
    }
}
