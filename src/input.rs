//! Document loading and section extraction.
//!
//! The document is parsed once with tree-sitter; headings found by the
//! format's query become section boundaries, and the blocks between two
//! headings become the earlier section's content tree. Identifiers are
//! slugified from heading text so they are stable and predictable for the
//! `--open` flag.

use crate::doctree::Node;
use crate::formats::Format;
use crate::section::Section;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Block-level node kinds lifted into the content tree as elements.
const BLOCK_KINDS: &[&str] = &[
    "paragraph",
    "fenced_code_block",
    "indented_code_block",
    "block_quote",
    "list",
    "pipe_table",
    "html_block",
    "thematic_break",
    "minus_metadata",
    "plus_metadata",
];

struct Heading {
    title: String,
    level: usize,
    start_byte: usize,
    end_byte: usize,
}

/// Reads the document source from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_document(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Parses the source and extracts sections in document order.
///
/// A document with no headings yields an empty vector; callers degrade to a
/// navigation-free view rather than failing.
///
/// # Errors
///
/// Returns an error if the grammar or its section query cannot be loaded.
pub fn extract_sections(source: &str, format: &dyn Format) -> io::Result<Vec<Section>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language).map_err(invalid)?;

    let Some(tree) = parser.parse(source, None) else {
        return Ok(Vec::new());
    };

    let query = Query::new(&language, format.section_query()).map_err(invalid)?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());

    let mut headings: Vec<Heading> = Vec::new();
    while let Some(found) = matches.next() {
        for capture in found.captures {
            headings.push(read_heading(capture.node, source));
        }
    }
    headings.sort_by_key(|heading| heading.start_byte);

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut sections = Vec::with_capacity(headings.len());
    for (index, heading) in headings.iter().enumerate() {
        let body_start = heading.end_byte;
        let body_end = headings
            .get(index + 1)
            .map_or(source.len(), |next| next.start_byte);

        let mut blocks = Vec::new();
        collect_blocks(tree.root_node(), source, body_start, body_end, &mut blocks);

        sections.push(Section {
            id: unique_slug(&heading.title, &mut seen),
            title: heading.title.clone(),
            level: heading.level,
            body: Node::element("section", blocks),
            active: false,
        });
    }

    Ok(sections)
}

fn read_heading(node: tree_sitter::Node, source: &str) -> Heading {
    let mut level = 1;
    let mut title = String::new();
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        let kind = child.kind();
        if let Some(depth) = kind
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
        {
            level = depth.parse().unwrap_or(1);
        } else if kind == "inline" {
            title = child
                .utf8_text(source.as_bytes())
                .unwrap_or_default()
                .trim()
                .to_string();
        }
    }
    Heading {
        title,
        level,
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
    }
}

fn collect_blocks(
    node: tree_sitter::Node,
    source: &str,
    start: usize,
    end: usize,
    out: &mut Vec<Node>,
) {
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        if child.end_byte() <= start || child.start_byte() >= end {
            continue;
        }
        let kind = child.kind();
        if BLOCK_KINDS.contains(&kind) && child.start_byte() >= start {
            let text = child.utf8_text(source.as_bytes()).unwrap_or_default();
            out.push(Node::element(kind, vec![Node::text(text)]));
        } else {
            collect_blocks(child, source, start, end, out);
        }
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

fn unique_slug(title: &str, seen: &mut HashMap<String, usize>) -> String {
    let base = slugify(title);
    let count = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{base}-{count}")
    }
}

fn invalid<E: std::fmt::Display>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err.to_string())
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
