/// `>`-prefixed quote lines. Nesting is handled by recursion: only one
/// marker layer is stripped per pass, so `>> deep` re-enters the block
/// parser as `> deep`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one `>` marker (plus one optional following space),
    /// returning the remainder. `None` when the line is not a quote.
    pub fn strip_marker(s: &str) -> Option<&str> {
        let rest = s.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
