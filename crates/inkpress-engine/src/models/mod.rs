pub mod block;
pub mod document;
pub mod metadata;
pub mod source_file;

pub use block::{Block, EmphasisKind, InlineSpan};
pub use document::Document;
pub use metadata::{FrontMatterKind, Metadata};
pub use source_file::SourceFile;
