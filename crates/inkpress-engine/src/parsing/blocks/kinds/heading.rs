/// Heading lines. All `#`-marker syntax knowledge lives here.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// `## text` → `(2, "text")`. Requires a space after the markers;
    /// more than six markers is not a heading.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let hashes = trimmed
            .bytes()
            .take_while(|b| *b == Self::MARKER as u8)
            .count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let text = trimmed[hashes..].strip_prefix(' ')?;
        Some((hashes as u8, text.trim()))
    }
}
