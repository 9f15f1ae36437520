#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// Fenced code delimiters. A fence only closes on a delimiter of the
/// same kind as its opener.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Delimiter signature of a line: the fence kind plus the language
    /// hint trailing the markers (openers only; closers carry none).
    pub fn sig(trimmed: &str) -> Option<(FenceKind, Option<String>)> {
        let (kind, rest) = if let Some(rest) = trimmed.strip_prefix(Self::BACKTICKS) {
            (FenceKind::Backticks, rest)
        } else if let Some(rest) = trimmed.strip_prefix(Self::TILDES) {
            (FenceKind::Tildes, rest)
        } else {
            return None;
        };
        let lang = rest.trim();
        let lang = (!lang.is_empty()).then(|| lang.to_string());
        Some((kind, lang))
    }

    pub fn closes(open: FenceKind, sig: Option<FenceKind>) -> bool {
        sig == Some(open)
    }
}
