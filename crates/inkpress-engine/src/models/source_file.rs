use relative_path::{RelativePath, RelativePathBuf};

use crate::parsing::blocks::slug::slugify;

/// One raw content file from the corpus: its full text plus a
/// path-derived slug. Immutable input to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    relative_path: RelativePathBuf,
    slug: String,
    text: String,
}

impl SourceFile {
    /// Create a new SourceFile from a relative path and its raw text
    pub fn new(relative_path: RelativePathBuf, text: String) -> Self {
        let slug = Self::derive_slug(&relative_path);
        Self {
            relative_path,
            slug,
            text,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str, text: &str) -> Self {
        Self::new(RelativePathBuf::from(path), text.to_string())
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the path-derived slug (file stem, slugified)
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Get the raw file text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Derive the slug from the file name: extension stripped, then
    /// normalized the same way heading anchors are.
    fn derive_slug(path: &RelativePath) -> String {
        let stem = path
            .file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("untitled");
        slugify(stem)
    }
}
