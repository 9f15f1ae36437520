//! Inline markup resolution.
//!
//! Operates on the raw text of inline-eligible blocks (paragraphs,
//! headings, list items, footnote text) — never on code fences or raw
//! passthrough blocks.
//!
//! Cursor-based, single pass, left to right, with raw zones:
//! - Backtick code spans are checked first and suppress all other
//!   resolution inside them.
//! - Links, emphasis runs, and bare tags are resolved outside raw zones.
//! - Unterminated delimiters restore the cursor and degrade to literal
//!   text; resolution never fails.

pub mod cursor;
pub mod parser;

pub use parser::resolve;
