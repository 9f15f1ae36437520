//! End-to-end pipeline tests: whole files in, documents out.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use inkpress_engine::parsing::{ParseError, ingest_corpus, parse_file, splitter};
use inkpress_engine::{Block, FrontMatterKind, InlineSpan, SourceFile};

fn single_document(text: &str) -> inkpress_engine::Document {
    let file = SourceFile::from_relative_str("post.md", text);
    let mut outcome = parse_file(&file);
    assert!(outcome.errors.is_empty(), "unexpected errors: {:?}", outcome.errors);
    assert_eq!(outcome.documents.len(), 1);
    outcome.documents.remove(0)
}

#[test]
fn key_value_header_parses() {
    let doc = single_document("title = X\ndate = 2014-01-02\n---\nbody text\n");
    assert_eq!(doc.metadata().title, "X");
    assert_eq!(
        doc.metadata().date,
        NaiveDate::from_ymd_opt(2014, 1, 2).unwrap()
    );
    assert_eq!(doc.metadata().convention, FrontMatterKind::KeyValue);
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph(vec![InlineSpan::text("body text")])]
    );
}

#[test]
fn heading_style_header_parses() {
    let doc = single_document("# X\n## January 2, 2014\n###### a,b\nbody\n");
    assert_eq!(doc.metadata().title, "X");
    assert_eq!(
        doc.metadata().date,
        NaiveDate::from_ymd_opt(2014, 1, 2).unwrap()
    );
    assert_eq!(doc.metadata().tags, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(doc.metadata().convention, FrontMatterKind::HeadingStyle);
}

#[test]
fn duplicate_headings_get_unique_slugs() {
    let doc = single_document(
        "title = X\ndate = 2014-01-02\n---\n### Heading\ntext\n\nmore\n\n### Heading\n",
    );
    assert_eq!(doc.heading_slugs(), vec!["heading", "heading-2"]);
}

#[test]
fn fenced_block_is_never_inline_resolved() {
    let doc = single_document(
        "title = X\ndate = 2014-01-02\n---\n```\n[not a link](nope)\n**not bold**\n```\n",
    );
    assert_eq!(
        doc.blocks(),
        &[Block::CodeFence {
            lang: None,
            lines: vec!["[not a link](nope)".to_string(), "**not bold**".to_string()],
        }]
    );
}

#[test]
fn sentinel_splits_into_two_documents() {
    let text = "title = A\ndate = 2020-01-01\n---\nfirst\n%%%\ntitle = B\ndate = 2020-02-02\n---\nsecond\n";
    let file = SourceFile::from_relative_str("double.md", text);

    let split = splitter::split_segments(text);
    assert_eq!(split.segments().len(), 2);

    let outcome = parse_file(&file);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.documents.len(), 2);
    assert_eq!(outcome.documents[0].metadata().title, "A");
    assert_eq!(outcome.documents[1].metadata().title, "B");
}

#[test]
fn unterminated_emphasis_is_literal_text() {
    let doc = single_document("title = X\ndate = 2014-01-02\n---\n*bold with no close\n");
    assert_eq!(
        doc.blocks(),
        &[Block::Paragraph(vec![InlineSpan::text(
            "*bold with no close"
        )])]
    );
}

#[test]
fn split_then_reassemble_is_byte_exact() {
    let text = "title = A\ndate = 2020-01-01\n---\nfirst\n%%%\n# B\n## 2020-02-02\nsecond\n%%%\nthird\n";
    let split = splitter::split_segments(text);
    assert_eq!(split.segments().len(), 3);
    assert_eq!(split.reassemble(), text);
}

#[test]
fn fence_content_is_byte_identical() {
    let source_lines = ["† not a footnote", "> not a quote", "%% almost sentinel", "\tindented\tkeep"];
    let text = format!(
        "title = X\ndate = 2014-01-02\n---\n```txt\n{}\n```\n",
        source_lines.join("\n")
    );
    let doc = single_document(&text);
    let Block::CodeFence { lines, lang } = &doc.blocks()[0] else {
        panic!("expected code fence");
    };
    assert_eq!(lang.as_deref(), Some("txt"));
    assert_eq!(lines, &source_lines);
}

#[test]
fn parsing_is_deterministic() {
    let text = "title = X\ndate = 2014-01-02\n---\n## A\npara *i*\n\n* one\n* two\n\n> quote\n";
    let file = SourceFile::from_relative_str("p.md", text);
    let first = parse_file(&file).documents;
    let second = parse_file(&file).documents;
    assert_eq!(first, second);
}

#[test]
fn unterminated_fence_recovers_with_warning() {
    let file = SourceFile::from_relative_str(
        "p.md",
        "title = X\ndate = 2014-01-02\n---\n```\nnever closed\n",
    );
    let outcome = parse_file(&file);
    assert!(outcome.errors.is_empty());
    assert_eq!(
        outcome.warnings,
        vec![ParseError::UnterminatedCodeFence { segment: 0 }]
    );
    assert_eq!(
        outcome.documents[0].blocks(),
        &[Block::CodeFence {
            lang: None,
            lines: vec!["never closed".to_string()],
        }]
    );
}

#[test]
fn failed_segment_does_not_abort_siblings() {
    let text = "not front matter at all\nbody\n%%%\ntitle = B\ndate = 2020-02-02\n---\nfine\n";
    let file = SourceFile::from_relative_str("mixed.md", text);
    let outcome = parse_file(&file);
    assert_eq!(outcome.documents.len(), 1);
    assert_eq!(outcome.documents[0].metadata().title, "B");
    assert_eq!(
        outcome.errors,
        vec![ParseError::UnrecognizedFrontMatter { segment: 0 }]
    );
}

#[test]
fn bad_file_does_not_abort_corpus() {
    let good = SourceFile::from_relative_str("a.md", "title = A\ndate = 2020-01-01\n---\nbody\n");
    let bad = SourceFile::from_relative_str("b.md", "title = B\ndate = someday\n---\nbody\n");
    let also_good =
        SourceFile::from_relative_str("c.md", "# C\n## March 3, 2020\nbody\n");

    let corpus = ingest_corpus([&good, &bad, &also_good]);

    assert_eq!(corpus.documents.len(), 2);
    assert_eq!(corpus.errors.len(), 1);
    assert_eq!(corpus.errors[0].path.as_str(), "b.md");
    assert_eq!(
        corpus.errors[0].error,
        ParseError::InvalidDate {
            segment: 0,
            value: "someday".to_string()
        }
    );
}

#[test]
fn recovered_warnings_keep_their_file_path() {
    let clean = SourceFile::from_relative_str("a.md", "title = A\ndate = 2020-01-01\n---\nbody\n");
    let ragged = SourceFile::from_relative_str(
        "b.md",
        "title = B\ndate = 2020-01-02\n---\n```rust\nnever closed\n",
    );

    let corpus = ingest_corpus([&clean, &ragged]);

    assert_eq!(corpus.documents.len(), 2);
    assert!(corpus.errors.is_empty());
    assert_eq!(corpus.warnings.len(), 1);
    assert_eq!(corpus.warnings[0].path.as_str(), "b.md");
    assert_eq!(
        corpus.warnings[0].error,
        ParseError::UnterminatedCodeFence { segment: 0 }
    );
}

#[test]
fn embed_widget_passes_through_verbatim() {
    let embed = "<blockquote class=\"twitter-tweet\" lang=\"en\">\n<p>Tweet *text* [sic](x)</p>\n&mdash; someone\n</blockquote>";
    let text = format!("title = X\ndate = 2014-01-02\n---\nintro\n\n{embed}\n\noutro\n");
    let doc = single_document(&text);
    assert_eq!(
        doc.blocks(),
        &[
            Block::Paragraph(vec![InlineSpan::text("intro")]),
            Block::RawPassthrough(embed.to_string()),
            Block::Paragraph(vec![InlineSpan::text("outro")]),
        ]
    );
}

#[test]
fn footnotes_associate_by_symbol() {
    let text = "title = X\ndate = 2014-01-02\n---\nA claim‡ and another†.\n\n† second symbol, first position\n\n‡ first symbol, second position\n";
    let doc = single_document(text);
    let notes = doc.footnotes();
    assert_eq!(
        notes[&'†'],
        &[InlineSpan::text("second symbol, first position")][..]
    );
    assert_eq!(
        notes[&'‡'],
        &[InlineSpan::text("first symbol, second position")][..]
    );
}

#[test]
fn realistic_post_assembles_in_source_order() {
    let text = "\
# Shipping the rewrite
## April 5, 2019
###### rust, meta

It finally [shipped](https://example.com/rewrite) after **two** tries.

## What changed

1. the parser
2. the renderer

```rust
fn main() {}
```

> someone said it best:
> *just ship it*
";
    let doc = single_document(text);
    let kinds: Vec<&str> = doc
        .blocks()
        .iter()
        .map(|b| match b {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::List { .. } => "list",
            Block::CodeFence { .. } => "fence",
            Block::Blockquote(_) => "quote",
            Block::RawPassthrough(_) => "raw",
            Block::FootnoteMarker { .. } => "footnote",
        })
        .collect();
    assert_eq!(kinds, vec!["paragraph", "heading", "list", "fence", "quote"]);
    assert_eq!(doc.metadata().title, "Shipping the rewrite");
    assert_eq!(doc.heading_slugs(), vec!["what-changed"]);
}
