//! Named predicates used by the cleaner to pick nodes for removal.
//!
//! Kept apart from the traversal in [`cleaner`](super::cleaner) so each rule
//! can be checked on its own.

use scraper::ElementRef;

/// True when the element's raw `class` attribute contains `needle`.
///
/// This is substring containment on the attribute value, not class-list
/// membership: `has-mint-background-color-dark` matches
/// `has-mint-background-color`.
pub fn class_contains(element: &ElementRef<'_>, needle: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|class| class.contains(needle))
}

/// True when the element's concatenated text contains `needle` (case-sensitive).
pub fn text_contains(element: &ElementRef<'_>, needle: &str) -> bool {
    element.text().collect::<String>().contains(needle)
}
