use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Block, InlineSpan, Metadata};

/// One logical article: front matter plus its body blocks in source
/// order. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    metadata: Metadata,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(metadata: Metadata, blocks: Vec<Block>) -> Self {
        Self { metadata, blocks }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Footnote texts keyed by symbol. Inline dagger references are
    /// associated by symbol identity, not position, so a `†` anywhere in
    /// the body resolves against this map.
    pub fn footnotes(&self) -> BTreeMap<char, &[InlineSpan]> {
        let mut map = BTreeMap::new();
        for block in &self.blocks {
            if let Block::FootnoteMarker { symbol, text } = block {
                map.entry(*symbol).or_insert(text.as_slice());
            }
        }
        map
    }

    /// All heading anchor slugs in source order, nested quotes included.
    pub fn heading_slugs(&self) -> Vec<&str> {
        fn walk<'a>(blocks: &'a [Block], out: &mut Vec<&'a str>) {
            for block in blocks {
                match block {
                    Block::Heading { slug, .. } => out.push(slug),
                    Block::Blockquote(inner) => walk(inner, out),
                    _ => {}
                }
            }
        }
        let mut out = vec![];
        walk(&self.blocks, &mut out);
        out
    }
}
