use crate::models::Block;
use crate::parsing::inline;

use super::classify::{LineClass, LineKind};
use super::kinds::{CodeFence, FenceKind, RawTag};
use super::slug::SlugCounter;

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        lines: Vec<String>,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Fence {
        kind: FenceKind,
        lang: Option<String>,
        lines: Vec<String>,
    },
    /// `>`-quote lines with one marker layer stripped; reparsed
    /// recursively on flush.
    Quote {
        lines: Vec<String>,
    },
    /// A `<blockquote>` embed group captured verbatim.
    Embed {
        lines: Vec<String>,
    },
}

/// Folds classified lines into [`Block`]s, preserving source order.
pub struct BlockBuilder<'a> {
    slugs: &'a mut SlugCounter,
    leaf: LeafState,
    out: Vec<Block>,
    unterminated_fence: bool,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(slugs: &'a mut SlugCounter) -> Self {
        Self {
            slugs,
            leaf: LeafState::None,
            out: vec![],
            unterminated_fence: false,
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }
        if self.in_embed() {
            self.consume_embed_line(c);
            return;
        }

        match &c.kind {
            LineKind::Blank => self.flush(),
            LineKind::Fence { kind, lang } => {
                self.flush();
                self.leaf = LeafState::Fence {
                    kind: *kind,
                    lang: lang.clone(),
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => {
                self.flush();
                // The anchor comes from the raw heading text, before
                // inline resolution.
                let slug = self.slugs.assign(text);
                self.out.push(Block::Heading {
                    level: *level,
                    spans: inline::resolve(text),
                    slug,
                });
            }
            LineKind::ListItem { ordered, text } => {
                if let LeafState::List {
                    ordered: open,
                    items,
                } = &mut self.leaf
                    && *open == *ordered
                {
                    items.push(text.clone());
                } else {
                    self.flush();
                    self.leaf = LeafState::List {
                        ordered: *ordered,
                        items: vec![text.clone()],
                    };
                }
            }
            LineKind::Quote { text } => {
                if let LeafState::Quote { lines } = &mut self.leaf {
                    lines.push(text.clone());
                } else {
                    self.flush();
                    self.leaf = LeafState::Quote {
                        lines: vec![text.clone()],
                    };
                }
            }
            LineKind::RawTag => {
                self.flush();
                let line = strip_newline(&c.raw).to_string();
                if RawTag::opens_embed_group(line.trim_start()) {
                    if RawTag::closes_embed_group(&line) {
                        self.out.push(Block::RawPassthrough(line));
                    } else {
                        self.leaf = LeafState::Embed { lines: vec![line] };
                    }
                } else {
                    self.out.push(Block::RawPassthrough(line));
                }
            }
            LineKind::Footnote { symbol, text } => {
                self.flush();
                self.out.push(Block::FootnoteMarker {
                    symbol: *symbol,
                    text: inline::resolve(text),
                });
            }
            LineKind::Text { text } => {
                if let LeafState::Paragraph { lines } = &mut self.leaf {
                    lines.push(text.clone());
                } else {
                    self.flush();
                    self.leaf = LeafState::Paragraph {
                        lines: vec![text.clone()],
                    };
                }
            }
        }
    }

    /// Flushes any open leaf and reports whether a fence was left
    /// unterminated (recovered by keeping its lines).
    pub fn finish(mut self) -> (Vec<Block>, bool) {
        // EOF flush
        self.flush();
        (self.out, self.unterminated_fence)
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn in_embed(&self) -> bool {
        matches!(self.leaf, LeafState::Embed { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence { kind, lang, lines } = &mut self.leaf else {
            return;
        };

        if let LineKind::Fence { kind: sig, .. } = &c.kind
            && CodeFence::closes(*kind, Some(*sig))
        {
            self.out.push(Block::CodeFence {
                lang: lang.take(),
                lines: std::mem::take(lines),
            });
            self.leaf = LeafState::None;
            return;
        }

        // Interior lines are verbatim; markup-looking text stays as-is.
        lines.push(strip_newline(&c.raw).to_string());
    }

    fn consume_embed_line(&mut self, c: &LineClass) {
        let LeafState::Embed { lines } = &mut self.leaf else {
            return;
        };

        let line = strip_newline(&c.raw).to_string();
        let closes = RawTag::closes_embed_group(&line);
        lines.push(line);
        if closes {
            self.out.push(Block::RawPassthrough(lines.join("\n")));
            self.leaf = LeafState::None;
        }
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => {
                self.out
                    .push(Block::Paragraph(inline::resolve(&lines.join(" "))));
            }
            LeafState::List { ordered, items } => {
                self.out.push(Block::List {
                    ordered,
                    items: items.iter().map(|item| inline::resolve(item)).collect(),
                });
            }
            LeafState::Fence { lang, lines, .. } => {
                // Unterminated fence: keep the lines, flag the recovery.
                tracing::warn!("code fence opened but never closed; kept remaining lines");
                self.unterminated_fence = true;
                self.out.push(Block::CodeFence { lang, lines });
            }
            LeafState::Quote { lines } => {
                let (blocks, unterminated) =
                    super::parse_body_with_slugs(&lines.join("\n"), self.slugs);
                self.unterminated_fence |= unterminated;
                self.out.push(Block::Blockquote(blocks));
            }
            LeafState::Embed { lines } => {
                tracing::warn!("embed group never closed; passing captured lines through");
                self.out.push(Block::RawPassthrough(lines.join("\n")));
            }
        }
    }
}

/// Strips one trailing line terminator, leaving all other bytes alone.
fn strip_newline(raw: &str) -> &str {
    let raw = raw.strip_suffix('\n').unwrap_or(raw);
    raw.strip_suffix('\r').unwrap_or(raw)
}
