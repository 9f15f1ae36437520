use super::error::ParseError;
use super::frontmatter;

/// The document separator: this token on a line of its own.
pub const SENTINEL: &str = "%%%";

/// A raw file cut into segments on the sentinel.
///
/// The cut is lossless: the exact separator lines are retained so
/// [`SplitFile::reassemble`] reproduces the input byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFile {
    segments: Vec<String>,
    separators: Vec<String>,
}

impl SplitFile {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Rejoins segments on the original sentinel lines.
    pub fn reassemble(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            out.push_str(segment);
            if let Some(sep) = self.separators.get(i) {
                out.push_str(sep);
            }
        }
        out
    }
}

/// Cuts raw file text on every sentinel line, yielding at least one
/// segment.
///
/// This runs as a raw-text pre-pass before any block parsing, so a
/// sentinel line inside a fenced code block still splits. That tradeoff
/// keeps the cut byte-exact and reassemblable.
pub fn split_segments(text: &str) -> SplitFile {
    let mut segments = vec![String::new()];
    let mut separators = vec![];

    for line in text.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == SENTINEL {
            separators.push(line.to_string());
            segments.push(String::new());
        } else {
            // `segments` is never empty
            segments.last_mut().unwrap().push_str(line);
        }
    }

    SplitFile {
        segments,
        separators,
    }
}

/// Splits one segment into (header, body) text.
///
/// The header ends at the `---` terminator for the KeyValue convention,
/// or after the leading `#` / `##` / optional `######` lines for the
/// HeadingStyle convention. When neither boundary is recognizable the
/// first non-blank line is handed back as the header and the
/// front-matter parser reports the mismatch.
pub fn cut_header(segment: usize, text: &str) -> Result<(String, String), ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::MalformedDocument { segment });
    }

    if let Some(cut) = key_value_boundary(text) {
        return Ok(split_at_line(text, cut));
    }
    if let Some(cut) = heading_style_boundary(text) {
        return Ok(split_at_line(text, cut));
    }

    // Neither convention: surface the leading non-blank line so the
    // front-matter parser can report what it saw.
    let first_content = text
        .split_inclusive('\n')
        .position(|l| !l.trim().is_empty())
        .unwrap_or(0);
    Ok(split_at_line(text, first_content + 1))
}

/// Line count of a KeyValue header (through its `---` line), if the
/// leading lines fit that convention.
fn key_value_boundary(text: &str) -> Option<usize> {
    let mut saw_pair = false;
    for (i, line) in text.split_inclusive('\n').enumerate() {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed == frontmatter::KEY_VALUE_TERMINATOR {
            return saw_pair.then_some(i + 1);
        }
        if trimmed.trim().is_empty() {
            continue;
        }
        if frontmatter::is_key_value_line(trimmed) {
            saw_pair = true;
        } else {
            return None;
        }
    }
    None
}

/// Line count of a HeadingStyle header: a `#` title, a `##` date, and an
/// optional `######` tag line, all at the top of the segment.
fn heading_style_boundary(text: &str) -> Option<usize> {
    let mut lines = text.split_inclusive('\n').enumerate();
    let (_, first) = lines.find(|(_, l)| !l.trim().is_empty())?;
    if heading_level(first) != Some(1) {
        return None;
    }
    let (i, second) = lines.next()?;
    if heading_level(second) != Some(2) {
        return None;
    }
    let mut end = i;
    if let Some((i, third)) = lines.next()
        && heading_level(third) == Some(6)
    {
        end = i;
    }
    Some(end + 1)
}

fn heading_level(line: &str) -> Option<u8> {
    super::blocks::kinds::Heading::parse(line.trim_end_matches(['\r', '\n'])).map(|(level, _)| level)
}

/// Splits text after `n` lines, keeping line terminators on both sides.
fn split_at_line(text: &str, n: usize) -> (String, String) {
    let mut header = String::new();
    let mut body = String::new();
    for (i, line) in text.split_inclusive('\n').enumerate() {
        if i < n {
            header.push_str(line);
        } else {
            body.push_str(line);
        }
    }
    (header, body)
}
