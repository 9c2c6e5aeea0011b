//! Project scrapers for the listing and detail page shapes.
//!
//! Scraping follows a two-phase pattern:
//!
//! 1. **Indexing**: [`listing::extract_listing`] reads the project cards
//! 2. **Fetching**: [`detail::fetch_detail`] downloads each card's detail page
//!    and hands its content container to [`cleaner::clean`]
//!
//! | Module | Role |
//! |--------|------|
//! | [`listing`] | Cards, titles, links; fatal on listing failure |
//! | [`detail`] | Detail pages; degrades to sentinel text |
//! | [`cleaner`] | Removes key-fact boxes, captions, related-projects footer |
//! | [`matchers`] | Class and text predicates used by the cleaner |

pub mod cleaner;
pub mod detail;
pub mod listing;
pub mod matchers;
