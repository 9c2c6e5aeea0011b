//! Summarization model interface and its LLM-backed implementation.
//!
//! # Architecture
//!
//! - [`SummaryModel`]: the text-in/text-out capability the pipeline depends on
//! - [`AwfulSummaryModel`]: an OpenAI-compatible chat model reached through
//!   `awful_aj`, loaded once in `main` and passed down by reference
//!
//! The chat template is expected to instruct the model to answer with
//! `{"summaryText": "..."}`. Answers cut off mid-JSON are re-asked once;
//! answers that are not JSON at all are taken verbatim.

use crate::utils::{looks_truncated, truncate_for_log};
use awful_aj::api::ask;
use awful_aj::{config, config_dir, template};
use awful_aj::{config::AwfulJadeConfig, template::ChatTemplate};
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Input to one summarization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub text: String,
    /// Approximate upper bound on summary length, in tokens.
    pub max_length: usize,
    /// Approximate lower bound on summary length, in tokens.
    pub min_length: usize,
    /// Ask for the same output on the same input (no sampling).
    pub deterministic: bool,
}

/// A text summarization backend.
///
/// Any model satisfying this shape can stand in for the LLM, which is how
/// the pipeline is tested without network access.
pub trait SummaryModel {
    /// Summarize `request.text` and return the summary text.
    async fn summarize(&self, request: &SummaryRequest) -> Result<String, Box<dyn Error>>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    summary_text: String,
}

/// [`SummaryModel`] backed by `awful_aj::api::ask`.
pub struct AwfulSummaryModel {
    config: AwfulJadeConfig,
    template: ChatTemplate,
}

impl fmt::Debug for AwfulSummaryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwfulSummaryModel").finish_non_exhaustive()
    }
}

impl AwfulSummaryModel {
    /// Load the LLM config and chat template.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path to `config.yaml`; defaults to the `awful_aj` config dir
    /// * `template_name` - Name of the chat template to load
    #[instrument(level = "info")]
    pub async fn load(config_path: Option<&str>, template_name: &str) -> Result<Self, Box<dyn Error>> {
        let config_path = match config_path {
            Some(path) => path.to_string(),
            None => config_dir()?.join("config.yaml").to_string_lossy().into_owned(),
        };
        let config = config::load_config(&config_path)
            .map_err(|e| format!("failed to load LLM config {config_path}: {e}"))?;
        info!(%config_path, "Loaded LLM configuration");

        let template = template::load_template(template_name).await?;
        info!(template = template_name, "Loaded chat template");

        Ok(Self { config, template })
    }

    async fn ask(&self, prompt: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let res = ask(&self.config, prompt.to_string(), &self.template, None, None).await;
        let elapsed_ms = t0.elapsed().as_millis() as u64;

        match &res {
            Ok(response) => debug!(elapsed_ms, bytes = response.len(), "LLM call succeeded"),
            Err(e) => warn!(elapsed_ms, error = %e, "LLM call failed"),
        }
        res
    }
}

impl SummaryModel for AwfulSummaryModel {
    #[instrument(level = "info", skip_all, fields(words = request.text.split_whitespace().count()))]
    async fn summarize(&self, request: &SummaryRequest) -> Result<String, Box<dyn Error>> {
        let prompt = build_prompt(request);
        let response = self.ask(&prompt).await?;

        match parse_summary(&response) {
            Ok(summary) => Ok(summary),
            Err(e) if looks_truncated(&e) => {
                warn!(error = %e, "EOF while parsing summary; re-asking once");
                let retry = self.ask(&prompt).await?;
                parse_summary(&retry).map_err(|e2| {
                    warn!(
                        error = %e2,
                        response_preview = %truncate_for_log(&retry, 300),
                        "Re-asked summary is still not valid JSON"
                    );
                    e2.into()
                })
            }
            Err(e) => {
                debug!(error = %e, "Summary is not JSON; using the raw response");
                let raw = response.trim();
                if raw.is_empty() {
                    Err("model returned an empty summary".into())
                } else {
                    Ok(raw.to_string())
                }
            }
        }
    }
}

/// Render the user message for one summarization request.
pub fn build_prompt(request: &SummaryRequest) -> String {
    let sampling = if request.deterministic {
        "Use greedy decoding: the same text must always produce the same summary."
    } else {
        "Sampling is allowed."
    };
    format!(
        "Summarize the following project description in at least {} and at most {} tokens. \
         {}\nRespond only with JSON of the form {{\"summaryText\": \"...\"}}.\n\n{}",
        request.min_length, request.max_length, sampling, request.text
    )
}

/// Extract the summary from a JSON answer, tolerating a Markdown code fence.
pub fn parse_summary(response: &str) -> Result<String, serde_json::Error> {
    let body = response.trim();
    let body = body
        .strip_prefix("```json")
        .or_else(|| body.strip_prefix("```"))
        .map(|b| b.trim_end().trim_end_matches("```"))
        .unwrap_or(body);
    let parsed: SummaryResponse = serde_json::from_str(body.trim())?;
    Ok(parsed.summary_text.trim().to_string())
}
