use serde::{Deserialize, Serialize};

/// Emphasis delimiter families recognized by the inline resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmphasisKind {
    Bold,
    Italic,
    Strike,
}

/// A resolved unit within a block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// A run wrapped in matching emphasis delimiters.
    Emphasis {
        kind: EmphasisKind,
        children: Vec<InlineSpan>,
    },
    /// Backtick-delimited code. A raw zone: nothing is resolved inside.
    Code(String),
    /// `[display](url)` shorthand. Display text is itself resolved.
    Link {
        children: Vec<InlineSpan>,
        url: String,
    },
    /// A bare markup tag embedded mid-sentence, passed through verbatim.
    RawTag(String),
}

impl InlineSpan {
    /// Convenience constructor for plain text spans.
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text(s.into())
    }
}

/// A block-level node of a document body, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Heading {
        level: u8,
        spans: Vec<InlineSpan>,
        /// Unique within the document; collisions get `-2`, `-3`, ...
        slug: String,
    },
    Paragraph(Vec<InlineSpan>),
    List {
        ordered: bool,
        items: Vec<Vec<InlineSpan>>,
    },
    /// Fenced code. Lines are verbatim and never inline-resolved.
    CodeFence {
        lang: Option<String>,
        lines: Vec<String>,
    },
    /// A `>`-prefixed quote; its interior is parsed as nested blocks.
    Blockquote(Vec<Block>),
    /// Verbatim markup lines, including embed-widget snippets. Interior
    /// is never reinterpreted.
    RawPassthrough(String),
    /// A dagger-citation footnote, keyed by its symbol.
    FootnoteMarker {
        symbol: char,
        text: Vec<InlineSpan>,
    },
}
