use crate::models::{EmphasisKind, InlineSpan};

use super::cursor::Cursor;

const TICK: char = '`';

/// Emphasis delimiters, longest first so `**` wins over `*`.
const EMPHASIS: [(&str, EmphasisKind); 5] = [
    ("**", EmphasisKind::Bold),
    ("__", EmphasisKind::Bold),
    ("~~", EmphasisKind::Strike),
    ("*", EmphasisKind::Italic),
    ("_", EmphasisKind::Italic),
];

/// Resolves a block's raw text into a sequence of [`InlineSpan`]s.
///
/// Constructs are tried at each position in precedence order: code
/// spans (raw zone) first, then links, emphasis, bare tags. Text
/// between constructs accumulates into `Text` spans. An opening
/// delimiter with no matching close flushes back to literal text.
pub fn resolve(s: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let at = cur.i;
        let span = try_code(&mut cur)
            .or_else(|| try_link(&mut cur))
            .or_else(|| try_emphasis(&mut cur))
            .or_else(|| try_raw_tag(&mut cur));

        match span {
            Some(span) => {
                flush_text(&mut out, &s[text_start..at]);
                text_start = cur.i;
                out.push(span);
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

fn flush_text(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.is_empty() {
        out.push(InlineSpan::Text(text.to_string()));
    }
}

/// Attempts a backtick code span at the current position.
///
/// The interior is exempt from further resolution. Returns `None` (with
/// the cursor restored) when the span isn't closed.
fn try_code(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let Some(rel) = cur.find_ahead("`") else {
        *cur = saved;
        return None;
    };
    let inner = &cur.s[cur.i..cur.i + rel];
    cur.bump_n(rel + 1); // interior + closing `

    Some(InlineSpan::Code(inner.to_string()))
}

/// Attempts a `[display](url)` link at the current position.
///
/// Display text is resolved recursively; the URL is taken verbatim.
fn try_link(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some('[') {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label_start = cur.i;
    while !cur.eof() && cur.peek() != Some(']') {
        cur.bump();
    }
    if cur.eof() {
        *cur = saved;
        return None;
    }
    let label_end = cur.i;
    cur.bump(); // ]

    if cur.peek() != Some('(') {
        *cur = saved;
        return None;
    }
    cur.bump(); // (
    let url_start = cur.i;
    while !cur.eof() && cur.peek() != Some(')') {
        cur.bump();
    }
    if cur.eof() {
        *cur = saved;
        return None;
    }
    let url_end = cur.i;
    cur.bump(); // )

    Some(InlineSpan::Link {
        children: resolve(&cur.s[label_start..label_end]),
        url: cur.s[url_start..url_end].to_string(),
    })
}

/// Attempts an emphasis run at the current position, longest delimiter
/// first.
fn try_emphasis(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    EMPHASIS
        .iter()
        .find_map(|(delim, kind)| try_delimited(cur, delim, *kind))
}

fn try_delimited(cur: &mut Cursor<'_>, delim: &str, kind: EmphasisKind) -> Option<InlineSpan> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(delim.len());
    let Some(rel) = cur.find_ahead(delim) else {
        *cur = saved;
        return None;
    };
    let inner = &cur.s[cur.i..cur.i + rel];
    // An empty run, or one padded with whitespace, reads as literal
    // punctuation (`2 * 3 * 4` is arithmetic, not emphasis).
    if inner.is_empty() || inner.trim() != inner {
        *cur = saved;
        return None;
    }
    cur.bump_n(rel + delim.len());

    Some(InlineSpan::Emphasis {
        kind,
        children: resolve(inner),
    })
}

/// Attempts a bare markup tag (`<em>`, `<br/>`, `</a>`, ...) at the
/// current position, passed through unchanged.
fn try_raw_tag(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some('<') {
        return None;
    }
    let mut ahead = cur.rest().chars();
    ahead.next(); // <
    if !matches!(ahead.next(), Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!') {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // <
    let Some(rel) = cur.find_ahead(">") else {
        *cur = saved;
        return None;
    };
    cur.bump_n(rel + 1); // through >

    Some(InlineSpan::RawTag(cur.s[saved.i..cur.i].to_string()))
}
