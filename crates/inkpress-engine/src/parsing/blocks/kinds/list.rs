/// List item lines: `*` / `-` unordered, `1.` ordered. Indentation is
/// accepted and flattened (the block model keeps lists flat).
pub struct ListMarker;

impl ListMarker {
    pub const UNORDERED: [&'static str; 2] = ["* ", "- "];

    /// `* item` → `(false, "item")`, `3. item` → `(true, "item")`.
    pub fn parse(trimmed: &str) -> Option<(bool, &str)> {
        let s = trimmed.trim_start();

        for marker in Self::UNORDERED {
            if let Some(text) = s.strip_prefix(marker) {
                return Some((false, text.trim()));
            }
        }

        let digits = s.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0
            && let Some(text) = s[digits..].strip_prefix(". ")
        {
            return Some((true, text.trim()));
        }
        None
    }
}
