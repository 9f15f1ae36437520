//! The ingestion pipeline: splitter → front matter → block assembly →
//! inline resolution.
//!
//! Everything here is pure in-memory text processing. Files are
//! independent of each other, documents within a file are independent
//! of each other, and parsing the same input twice yields structurally
//! identical output, so callers are free to parallelize across files.

pub mod blocks;
pub mod error;
pub mod frontmatter;
pub mod inline;
pub mod splitter;

pub use error::{CorpusError, ParseError};

use crate::models::{Document, SourceFile};

/// Everything produced from one corpus file: the documents that parsed,
/// plus per-segment errors and recovered warnings. A failed segment
/// never takes its siblings down with it.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub documents: Vec<Document>,
    pub errors: Vec<ParseError>,
    pub warnings: Vec<ParseError>,
}

/// Parses one corpus file into its logical documents.
pub fn parse_file(file: &SourceFile) -> ParseOutcome {
    let split = splitter::split_segments(file.text());
    let mut outcome = ParseOutcome::default();

    for (segment, text) in split.segments().iter().enumerate() {
        match parse_segment(segment, text) {
            Ok((document, mut warnings)) => {
                outcome.warnings.append(&mut warnings);
                outcome.documents.push(document);
            }
            Err(error) => outcome.errors.push(error),
        }
    }

    tracing::debug!(
        slug = file.slug(),
        documents = outcome.documents.len(),
        errors = outcome.errors.len(),
        "parsed corpus file"
    );
    outcome
}

fn parse_segment(segment: usize, text: &str) -> Result<(Document, Vec<ParseError>), ParseError> {
    let (header, body) = splitter::cut_header(segment, text)?;
    let metadata = frontmatter::parse(segment, &header)?;
    let (blocks, unterminated) = blocks::parse_body(&body);

    let mut warnings = vec![];
    if unterminated {
        warnings.push(ParseError::UnterminatedCodeFence { segment });
    }
    Ok((Document::new(metadata, blocks), warnings))
}

/// The corpus-level counterpart of [`ParseOutcome`]: errors and
/// recovered warnings keep the path of the file they came from.
#[derive(Debug, Default)]
pub struct CorpusOutcome {
    pub documents: Vec<Document>,
    pub errors: Vec<CorpusError>,
    pub warnings: Vec<CorpusError>,
}

/// Ingests a whole corpus mapping. Errors and warnings are collected
/// per file with their path attached; no file aborts the rest.
pub fn ingest_corpus<'a, I>(files: I) -> CorpusOutcome
where
    I: IntoIterator<Item = &'a SourceFile>,
{
    let mut corpus = CorpusOutcome::default();

    for file in files {
        let outcome = parse_file(file);
        let attach = |error| CorpusError {
            path: file.relative_path().to_owned(),
            error,
        };
        corpus.documents.extend(outcome.documents);
        corpus.errors.extend(outcome.errors.into_iter().map(attach));
        corpus.warnings.extend(outcome.warnings.into_iter().map(attach));
    }

    corpus
}
