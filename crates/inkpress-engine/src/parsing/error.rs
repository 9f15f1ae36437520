use relative_path::RelativePathBuf;
use thiserror::Error;

/// Fatal and recoverable irregularities found while parsing one file.
///
/// Header-level and structural problems are fatal for the single segment
/// they occur in; inline-markup irregularities never surface here (they
/// degrade to literal text instead).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("segment {segment}: empty header")]
    MalformedDocument { segment: usize },

    #[error("segment {segment}: header matches neither front-matter convention")]
    UnrecognizedFrontMatter { segment: usize },

    #[error("segment {segment}: unparsable date {value:?}")]
    InvalidDate { segment: usize, value: String },

    /// Recovered by treating the remaining lines as fence content;
    /// reported as a warning, never a failure.
    #[error("segment {segment}: code fence opened but never closed")]
    UnterminatedCodeFence { segment: usize },
}

/// A [`ParseError`] tied to the corpus file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {error}")]
pub struct CorpusError {
    pub path: RelativePathBuf,
    pub error: ParseError,
}
