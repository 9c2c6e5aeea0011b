//! Plain-text report rendering.

use crate::models::PipelineReport;
use std::fmt::Write;

const PROJECT_RULE: &str = "--------------------------------------------------";
const SUMMARY_RULE: &str = "----";

/// Render a [`PipelineReport`] as the stdout enumeration.
///
/// Counts come first, then one block per project in listing order, then one
/// block per relevant project summary.
pub fn report_to_text(report: &PipelineReport) -> String {
    let mut out = String::new();

    writeln!(out, "Scraped projects from: {}", report.source_url).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Total number of projects scraped: {}", report.total()).unwrap();
    writeln!(out, "Number of relevant projects: {}", report.relevant_count()).unwrap();

    writeln!(out).unwrap();
    writeln!(out, "=== ALL PROJECTS (Title & Cleaned Description) ===").unwrap();
    for record in &report.records {
        let relevance = record
            .relevance
            .map(|r| r.to_string())
            .unwrap_or_else(|| "Unclassified".to_string());
        writeln!(out, "TITLE: {}", record.title).unwrap();
        writeln!(out, "DESCRIPTION:\n{}", record.description).unwrap();
        writeln!(out, "RELEVANCE: {}", relevance).unwrap();
        writeln!(out, "LINK: {}", record.link.as_deref().unwrap_or("None")).unwrap();
        writeln!(out, "{}", PROJECT_RULE).unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "=== RELEVANT PROJECT SUMMARIES ===").unwrap();
    for summary in &report.summaries {
        writeln!(out, "TITLE: {}", summary.title).unwrap();
        writeln!(out, "SUMMARY: {}", summary.summary).unwrap();
        writeln!(out, "{}", SUMMARY_RULE).unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectRecord, Relevance, SummaryResult};

    fn report() -> PipelineReport {
        let mut heat = ProjectRecord::new(
            "Heat Pump Pilot",
            "A pilot.",
            Some("https://ispt.eu/projects/heat-pump-pilot/".to_string()),
        );
        heat.relevance = Some(Relevance::Relevant);
        let mut app = ProjectRecord::new("Logistics App", "No description", None);
        app.relevance = Some(Relevance::Irrelevant);

        PipelineReport {
            source_url: "https://ispt.eu/projects/?theme-tag=heat".to_string(),
            records: vec![heat, app],
            summaries: vec![SummaryResult {
                title: "Heat Pump Pilot".to_string(),
                summary: "A pilot.".to_string(),
            }],
        }
    }

    #[test]
    fn test_counts_come_first() {
        let text = report_to_text(&report());
        let total = text.find("Total number of projects scraped: 2").unwrap();
        let relevant = text.find("Number of relevant projects: 1").unwrap();
        let projects = text.find("=== ALL PROJECTS").unwrap();
        let summaries = text.find("=== RELEVANT PROJECT SUMMARIES ===").unwrap();
        assert!(total < relevant && relevant < projects && projects < summaries);
    }

    #[test]
    fn test_project_block() {
        let text = report_to_text(&report());
        assert!(text.contains(
            "TITLE: Heat Pump Pilot\nDESCRIPTION:\nA pilot.\nRELEVANCE: Relevant\nLINK: https://ispt.eu/projects/heat-pump-pilot/\n"
        ));
        assert!(text.contains("RELEVANCE: Irrelevant\nLINK: None\n"));
    }

    #[test]
    fn test_summary_block() {
        let text = report_to_text(&report());
        assert!(text.ends_with("TITLE: Heat Pump Pilot\nSUMMARY: A pilot.\n----\n"));
    }
}
