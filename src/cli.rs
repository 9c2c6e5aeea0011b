//! Command-line interface definitions for Project Scout.
//!
//! Every option can also be supplied through an environment variable.
//! Anything not given on the command line falls back to the YAML config
//! file, then to built-in defaults (see [`crate::config`]).

use clap::Parser;

/// Command-line arguments for the Project Scout application.
///
/// # Examples
///
/// ```sh
/// # Scrape the default listing with the default keywords
/// project_scout
///
/// # Different listing page and keyword set
/// project_scout -u "https://ispt.eu/projects/?theme-tag=hydrogen" -k hydrogen -k electrolysis
///
/// # YAML config plus a specific LLM config
/// project_scout -c scout.yaml --ai-config ~/.config/aj/config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a scout YAML config file
    #[arg(short, long, env = "SCOUT_CONFIG")]
    pub config: Option<String>,

    /// Listing page URL (overrides the config file)
    #[arg(short, long, env = "SCOUT_LISTING_URL")]
    pub url: Option<String>,

    /// Relevance keyword; repeat for several (overrides the config file)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// Path to the LLM config.yaml (defaults to the awful_aj config dir)
    #[arg(long, env = "SCOUT_AI_CONFIG")]
    pub ai_config: Option<String>,

    /// Name of the awful_aj chat template used for summaries
    #[arg(long, env = "SCOUT_TEMPLATE", default_value = "project_summarizer")]
    pub template: String,
}

/// Parse `args` with every environment fallback stripped, so results do not
/// depend on the calling shell.
#[cfg(test)]
pub(crate) fn parse_without_env<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    use clap::{CommandFactory, FromArgMatches};

    let matches = Cli::command()
        .mut_args(|arg| arg.env(None::<&str>))
        .get_matches_from(args);
    Cli::from_arg_matches(&matches).unwrap()
}
