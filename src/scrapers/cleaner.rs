//! Text cleaning for a project detail page's content container.
//!
//! Three rules run in order, each one blind to what earlier rules removed:
//!
//! 1. `div` blocks whose class attribute contains `has-mint-background-color`
//!    (the highlighted "key facts" boxes)
//! 2. every `figcaption`
//! 3. the "You might also be interested in" `h2` and everything after it in
//!    document order (the related-projects footer)
//!
//! The parsed document is borrowed immutably. Removed subtrees are tracked
//! by node id and skipped while collecting text. Text inside `script`,
//! `style` and `template` elements is never page text and is skipped too.

use super::matchers::{class_contains, text_contains};
use ego_tree::{NodeId, NodeRef};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Node, Selector};
use std::collections::HashSet;
use tracing::debug;

pub const MINT_BACKGROUND_CLASS: &str = "has-mint-background-color";
pub const RELATED_HEADING: &str = "You might also be interested in";

static BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse("div").unwrap());
static CAPTION: Lazy<Selector> = Lazy::new(|| Selector::parse("figcaption").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static NON_TEXT: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script, style, template").unwrap());

/// Clean a content container and return its text.
///
/// Surviving text nodes are trimmed and joined with no separator, so
/// paragraph boundaries are lost.
pub fn clean(content: ElementRef<'_>) -> String {
    let mut dropped: HashSet<NodeId> = HashSet::new();

    let mut mint_blocks = 0usize;
    for block in content.select(&BLOCK) {
        if class_contains(&block, MINT_BACKGROUND_CLASS) {
            dropped.insert(block.id());
            mint_blocks += 1;
        }
    }

    let mut captions = 0usize;
    for caption in content.select(&CAPTION) {
        dropped.insert(caption.id());
        captions += 1;
    }

    let heading = content
        .select(&HEADING)
        .find(|h| !is_dropped(**h, &dropped) && text_contains(h, RELATED_HEADING));
    let truncated = heading.is_some();
    if let Some(heading) = heading {
        // pre-order walk: the heading, its subtree, then every later node
        let tail = content
            .descendants()
            .skip_while(|node| node.id() != heading.id())
            .map(|node| node.id());
        dropped.extend(tail);
    }

    dropped.extend(content.select(&NON_TEXT).map(|el| el.id()));

    debug!(mint_blocks, captions, truncated, "Cleaned content container");
    collect_text(content, &dropped)
}

fn collect_text(content: ElementRef<'_>, dropped: &HashSet<NodeId>) -> String {
    content
        .descendants()
        .filter(|node| !is_dropped(*node, dropped))
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(text.trim()),
            _ => None,
        })
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn is_dropped(node: NodeRef<'_, Node>, dropped: &HashSet<NodeId>) -> bool {
    std::iter::once(node)
        .chain(node.ancestors())
        .any(|n| dropped.contains(&n.id()))
}
