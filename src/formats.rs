//! Format trait and the markdown implementation.
//!
//! Abstracts over document formats by providing tree-sitter queries for
//! locating section headings, so section extraction does not hard-code any
//! one grammar.

/// Tree-sitter hooks a document format must supply for section extraction.
pub trait Format {
    /// The grammar to parse with.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing each section heading node.
    fn section_query(&self) -> &str;
}

/// ATX-style markdown headings (`#` syntax) via tree-sitter-md.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn section_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }
}
