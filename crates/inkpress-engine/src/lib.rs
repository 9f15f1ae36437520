pub mod io;
pub mod models;
pub mod parsing;


// Re-export key types for easier usage
pub use models::{Block, Document, EmphasisKind, FrontMatterKind, InlineSpan, Metadata, SourceFile};
pub use parsing::{CorpusError, CorpusOutcome, ParseError, ParseOutcome, ingest_corpus, parse_file};
