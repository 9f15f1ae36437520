use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which front-matter convention a document's header used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontMatterKind {
    /// `key = value` lines terminated by a `---` line.
    KeyValue,
    /// `# title` / `## date` / optional `###### tags` heading lines.
    HeadingStyle,
}

/// Parsed front matter, uniform across both conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub date: NaiveDate,
    /// Tags in author order, duplicates removed.
    pub tags: Vec<String>,
    pub convention: FrontMatterKind,
}

impl Metadata {
    pub fn new(
        title: String,
        date: NaiveDate,
        tags: Vec<String>,
        convention: FrontMatterKind,
    ) -> Self {
        let mut seen = Vec::with_capacity(tags.len());
        for tag in tags {
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        Self {
            title,
            date,
            tags: seen,
            convention,
        }
    }
}
