//! Output generation for a finished pipeline run.
//!
//! # Submodules
//!
//! - [`text`]: Renders a [`PipelineReport`](crate::models::PipelineReport) as
//!   the plain-text enumeration printed on stdout
//!
//! # Output Structure
//!
//! ```text
//! Total number of projects scraped: 3
//! Number of relevant projects: 2
//!
//! === ALL PROJECTS (Title & Cleaned Description) ===
//! TITLE: ...
//! DESCRIPTION:
//! ...
//! RELEVANCE: Relevant
//! LINK: https://...
//! --------------------------------------------------
//!
//! === RELEVANT PROJECT SUMMARIES ===
//! TITLE: ...
//! SUMMARY: ...
//! ----
//! ```

pub mod text;
