//! Block parsing: a stateless line classifier feeding a stateful
//! builder.
//!
//! Phase 1 ([`classify`]) assigns each line a kind from local facts
//! only. Phase 2 ([`builder`]) folds the classified lines into block
//! nodes, owning fence/embed interior state and paragraph/list/quote
//! grouping. Syntax knowledge for each construct lives in [`kinds`].

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod slug;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};

use crate::models::Block;
use slug::SlugCounter;

/// Classifies and assembles one document body into blocks. The flag
/// reports an unterminated code fence (recovered, not fatal).
pub fn parse_body(body: &str) -> (Vec<Block>, bool) {
    let mut slugs = SlugCounter::default();
    parse_body_with_slugs(body, &mut slugs)
}

/// Same, sharing a slug counter so quoted headings stay unique within
/// the whole document.
pub(crate) fn parse_body_with_slugs(body: &str, slugs: &mut SlugCounter) -> (Vec<Block>, bool) {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new(slugs);

    for line in body.split_inclusive('\n') {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}
