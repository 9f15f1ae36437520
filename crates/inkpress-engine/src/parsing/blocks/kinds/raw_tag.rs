/// Bare markup lines. The corpus hand-mixes shortcut markup with raw
/// tags, so anything tag-shaped passes through verbatim instead of
/// being reinterpreted.
pub struct RawTag;

impl RawTag {
    pub const BLOCKQUOTE_OPEN: &'static str = "<blockquote";
    pub const BLOCKQUOTE_CLOSE: &'static str = "</blockquote>";

    /// A line that is bare markup: `<` followed by a tag name, `/`, or
    /// `!`. Keeps comparisons like `a < b` out.
    pub fn is_tag_line(trimmed: &str) -> bool {
        let mut chars = trimmed.chars();
        chars.next() == Some('<')
            && matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!')
    }

    /// Opens an embed group that must be captured verbatim until the
    /// matching close. Third-party widgets rely on exact passthrough.
    pub fn opens_embed_group(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BLOCKQUOTE_OPEN)
    }

    pub fn closes_embed_group(trimmed: &str) -> bool {
        trimmed.contains(Self::BLOCKQUOTE_CLOSE)
    }
}
