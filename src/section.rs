//! Section and navigation control records.
//!
//! A section is a block of document content with a stable identifier; a
//! navigation control is the sidebar entry requesting that its target
//! section become active. Both are created once at load and afterwards only
//! their active/highlight flags change.

use crate::doctree::Node;

#[derive(Clone)]
/// A block of document content with a stable identifier.
pub struct Section {
    /// Unique identifier, slugified from the heading text.
    pub id: String,
    /// Heading text without markup symbols.
    pub title: String,
    /// Heading depth (1 for top-level).
    pub level: usize,
    /// Content tree between this heading and the next.
    pub body: Node,
    /// Whether this section is the currently displayed one.
    pub active: bool,
}

impl Section {
    #[must_use]
    /// Flattens the searchable text of this section: title plus body.
    pub fn text_content(&self) -> String {
        let mut out = self.title.clone();
        out.push('\n');
        self.body.collect_text(&mut out);
        out
    }
}

#[derive(Clone)]
/// A sidebar entry whose activation requests a specific section.
pub struct NavControl {
    /// Identifier of the section this control targets.
    pub target_section_id: String,
    /// Text shown in the sidebar.
    pub label: String,
    /// Heading depth of the target, for indentation.
    pub level: usize,
    /// Whether this control is marked as the active one.
    pub active: bool,
    /// Whether search currently decorates this control as a match.
    pub highlighted: bool,
}
