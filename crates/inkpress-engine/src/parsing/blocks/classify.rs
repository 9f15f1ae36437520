use super::kinds::{BlockQuote, CodeFence, FenceKind, Footnote, Heading, ListMarker, RawTag};

/// Classification of a single body line using only local facts.
///
/// This is phase 1 of block parsing: each line is classified
/// independently. Fence-interior state belongs to the builder, which is
/// why a fence delimiter is reported as a signature rather than being
/// resolved to open/close here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// A fence delimiter line with its kind and language hint.
    Fence {
        kind: FenceKind,
        lang: Option<String>,
    },
    Heading {
        level: u8,
        text: String,
    },
    ListItem {
        ordered: bool,
        text: String,
    },
    /// A `>`-quote line with one marker layer stripped.
    Quote {
        text: String,
    },
    /// A bare markup line, passed through verbatim by the builder.
    RawTag,
    Footnote {
        symbol: char,
        text: String,
    },
    Text {
        text: String,
    },
}

/// One classified line. `raw` keeps the verbatim line (terminator
/// included) so fence interiors and embed groups survive untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    pub raw: String,
    pub kind: LineKind,
}

pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line in ordered precedence: fence delimiter, quote,
    /// heading, list item, raw tag, footnote marker, paragraph text.
    pub fn classify(&self, raw: &str) -> LineClass {
        let trimmed = raw.trim_end_matches(['\r', '\n']);

        let kind = if trimmed.trim().is_empty() {
            LineKind::Blank
        } else if let Some((kind, lang)) = CodeFence::sig(trimmed) {
            LineKind::Fence { kind, lang }
        } else if let Some(text) = BlockQuote::strip_marker(trimmed) {
            LineKind::Quote {
                text: text.to_string(),
            }
        } else if let Some((level, text)) = Heading::parse(trimmed) {
            LineKind::Heading {
                level,
                text: text.to_string(),
            }
        } else if let Some((ordered, text)) = ListMarker::parse(trimmed) {
            LineKind::ListItem {
                ordered,
                text: text.to_string(),
            }
        } else if RawTag::is_tag_line(trimmed) {
            LineKind::RawTag
        } else if let Some((symbol, text)) = Footnote::parse(trimmed) {
            LineKind::Footnote {
                symbol,
                text: text.to_string(),
            }
        } else {
            LineKind::Text {
                text: trimmed.to_string(),
            }
        };

        LineClass {
            raw: raw.to_string(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(line: &str) -> LineKind {
        LineClassifier.classify(line).kind
    }

    #[test]
    fn blank_lines() {
        assert_eq!(kind("\n"), LineKind::Blank);
        assert_eq!(kind("   \n"), LineKind::Blank);
    }

    #[test]
    fn fence_delimiter_with_language() {
        assert_eq!(
            kind("```rust\n"),
            LineKind::Fence {
                kind: FenceKind::Backticks,
                lang: Some("rust".to_string())
            }
        );
    }

    #[test]
    fn heading_line() {
        assert_eq!(
            kind("### Section\n"),
            LineKind::Heading {
                level: 3,
                text: "Section".to_string()
            }
        );
    }

    #[test]
    fn list_items() {
        assert_eq!(
            kind("* item\n"),
            LineKind::ListItem {
                ordered: false,
                text: "item".to_string()
            }
        );
        assert_eq!(
            kind("2. item\n"),
            LineKind::ListItem {
                ordered: true,
                text: "item".to_string()
            }
        );
    }

    #[test]
    fn quote_line_strips_one_marker() {
        assert_eq!(
            kind("> quoted\n"),
            LineKind::Quote {
                text: "quoted".to_string()
            }
        );
    }

    #[test]
    fn raw_tag_line() {
        assert_eq!(kind("<img src=\"a.png\">\n"), LineKind::RawTag);
    }

    #[test]
    fn footnote_line() {
        assert_eq!(
            kind("† aside\n"),
            LineKind::Footnote {
                symbol: '†',
                text: "aside".to_string()
            }
        );
    }

    #[test]
    fn everything_else_is_text() {
        assert_eq!(
            kind("plain prose\n"),
            LineKind::Text {
                text: "plain prose".to_string()
            }
        );
    }

    #[test]
    fn raw_is_verbatim() {
        let c = LineClassifier.classify("  spaced \n");
        assert_eq!(c.raw, "  spaced \n");
    }
}
