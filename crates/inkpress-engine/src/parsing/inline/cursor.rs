/// A cursor for single-pass inline resolution.
///
/// Advances by whole characters so the local index always sits on a
/// UTF-8 boundary; `bump_n` is reserved for known-ASCII delimiters.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being resolved.
    pub s: &'a str,
    /// Current byte index into `s`, always a char boundary.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s[self.i..].starts_with(pat)
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Only valid for ASCII delimiters.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Byte offset of `pat` in the remaining input, relative to the
    /// current position.
    pub fn find_ahead(&self, pat: &str) -> Option<usize> {
        self.s[self.i..].find(pat)
    }

    /// The remaining input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }
}
