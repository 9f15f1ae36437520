use std::sync::LazyLock;

use regex::Regex;

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    let class: String = Footnote::SYMBOLS.iter().collect();
    Regex::new(&format!(r"^([{class}])\s*:?\s*(.*)$")).unwrap()
});

/// Dagger-citation footnotes: a recognized symbol opening a trailing
/// paragraph, paired with the same symbol appearing inline earlier in
/// the body. Pairing is by symbol identity, never by position.
pub struct Footnote;

impl Footnote {
    pub const SYMBOLS: [char; 2] = ['†', '‡'];

    /// `† like this` → `('†', "like this")`. An optional colon after
    /// the symbol is swallowed.
    pub fn parse(trimmed: &str) -> Option<(char, &str)> {
        let caps = MARKER.captures(trimmed)?;
        let symbol = caps.get(1)?.as_str().chars().next()?;
        Some((symbol, caps.get(2)?.as_str()))
    }
}
