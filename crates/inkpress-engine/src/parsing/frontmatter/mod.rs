//! Front-matter detection and parsing.
//!
//! Two conventions coexist in the corpus. Detection is a closed branch,
//! tried in order:
//!
//! 1. **KeyValue** — `key = value` lines terminated by a bare `---` line.
//! 2. **HeadingStyle** — a `#` title line, a `##` date line, and an
//!    optional `######` comma-separated tag line.
//!
//! Both produce the same [`Metadata`] record.

pub mod date;

use std::sync::LazyLock;

use regex::Regex;

use super::error::ParseError;
use crate::models::{FrontMatterKind, Metadata};

/// The line closing a KeyValue header.
pub const KEY_VALUE_TERMINATOR: &str = "---";

static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*)$").unwrap());

/// Whether a line is a `key = value` pair.
pub fn is_key_value_line(line: &str) -> bool {
    KEY_VALUE.is_match(line)
}

/// Detects which convention a header uses, without fully parsing it.
pub fn detect(header: &str) -> Option<FrontMatterKind> {
    let mut saw_pair = false;
    for line in header.lines() {
        let trimmed = line.trim_end_matches('\r');
        if trimmed == KEY_VALUE_TERMINATOR && saw_pair {
            return Some(FrontMatterKind::KeyValue);
        }
        if trimmed.trim().is_empty() {
            continue;
        }
        if is_key_value_line(trimmed) {
            saw_pair = true;
            continue;
        }
        // First line that is neither blank nor a pair decides between
        // HeadingStyle and no match at all.
        return match heading_text(trimmed, 1) {
            Some(_) => Some(FrontMatterKind::HeadingStyle),
            None => None,
        };
    }
    None
}

/// Parses a header segment into [`Metadata`].
pub fn parse(segment: usize, header: &str) -> Result<Metadata, ParseError> {
    match detect(header) {
        Some(FrontMatterKind::KeyValue) => parse_key_value(segment, header),
        Some(FrontMatterKind::HeadingStyle) => parse_heading_style(segment, header),
        None => Err(ParseError::UnrecognizedFrontMatter { segment }),
    }
}

fn parse_key_value(segment: usize, header: &str) -> Result<Metadata, ParseError> {
    let mut title = None;
    let mut date_raw = None;
    let mut tags = vec![];

    for line in header.lines() {
        let trimmed = line.trim_end_matches('\r');
        if trimmed == KEY_VALUE_TERMINATOR {
            break;
        }
        let Some(caps) = KEY_VALUE.captures(trimmed) else {
            continue;
        };
        let key = &caps[1];
        let value = unquote(caps[2].trim());
        match key {
            "title" => title = Some(value.to_string()),
            "date" => date_raw = Some(value.to_string()),
            "tags" => tags = split_tags(value),
            other => {
                tracing::debug!(key = other, "ignoring unknown front-matter key");
            }
        }
    }

    build(segment, title, date_raw, tags, FrontMatterKind::KeyValue)
}

fn parse_heading_style(segment: usize, header: &str) -> Result<Metadata, ParseError> {
    let mut title = None;
    let mut date_raw = None;
    let mut tags = vec![];

    for line in header.lines() {
        let trimmed = line.trim_end_matches('\r');
        if let Some(text) = heading_text(trimmed, 1) {
            title = Some(text.to_string());
        } else if let Some(text) = heading_text(trimmed, 2) {
            date_raw = Some(text.to_string());
        } else if let Some(text) = heading_text(trimmed, 6) {
            tags = split_tags(text);
        }
    }

    build(segment, title, date_raw, tags, FrontMatterKind::HeadingStyle)
}

fn build(
    segment: usize,
    title: Option<String>,
    date_raw: Option<String>,
    tags: Vec<String>,
    convention: FrontMatterKind,
) -> Result<Metadata, ParseError> {
    // A document always has a non-empty title and a well-formed date.
    let title = match title {
        Some(t) if !t.is_empty() => t,
        _ => return Err(ParseError::UnrecognizedFrontMatter { segment }),
    };
    let date_raw = date_raw.ok_or(ParseError::UnrecognizedFrontMatter { segment })?;
    let date = date::parse_date(&date_raw).ok_or_else(|| ParseError::InvalidDate {
        segment,
        value: date_raw,
    })?;
    Ok(Metadata::new(title, date, tags, convention))
}

/// Text of a heading line at exactly the given level.
fn heading_text(line: &str, level: u8) -> Option<&str> {
    let (found, text) = super::blocks::kinds::Heading::parse(line)?;
    (found == level).then_some(text)
}

fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Strips one layer of matching quotes, if present.
fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}
