//! A minimal document tree for rendered text.
//!
//! Sections own a subtree of block elements whose leaves are text nodes.
//! The tree exists so that text rewrites (sanitization) can be applied to
//! rendered content without disturbing document structure, and so that
//! traversal skip rules are data rather than control flow.

/// Container tags whose text is never rendered and must not be rewritten.
///
/// Raw HTML blocks and frontmatter fences play the role that script and
/// style containers play in an HTML page.
pub const NON_RENDERED_TAGS: &[&str] = &["html_block", "minus_metadata", "plus_metadata"];

/// One node in a section's content tree.
#[derive(Clone, Debug)]
pub enum Node {
    /// A container carrying a block kind tag and child nodes.
    Element {
        /// Block kind from the markdown grammar (paragraph, `html_block`, ...).
        tag: String,
        /// Nested nodes in document order.
        children: Vec<Node>,
    },
    /// A leaf holding an owned run of text.
    Text(String),
}

impl Node {
    #[must_use]
    /// Builds a container node.
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.into(),
            children,
        }
    }

    #[must_use]
    /// Builds a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Appends the concatenated text of this subtree to `out`.
    ///
    /// Every text leaf contributes, separated by newlines between block
    /// elements, mirroring how the content pane flattens a section.
    pub fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(value),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                    if matches!(child, Node::Element { .. }) {
                        out.push('\n');
                    }
                }
            }
        }
    }

    #[must_use]
    /// Returns the concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// Visits every text leaf whose parent chain avoids `skip_tags`,
    /// applying `transform` to the owned text in place.
    ///
    /// A container whose tag appears in `skip_tags` is pruned whole: none
    /// of its descendants are visited.
    pub fn for_each_text_node<F>(&mut self, skip_tags: &[&str], transform: &mut F)
    where
        F: FnMut(&mut String),
    {
        match self {
            Node::Text(value) => transform(value),
            Node::Element { tag, children } => {
                if skip_tags.contains(&tag.as_str()) {
                    return;
                }
                for child in children {
                    child.for_each_text_node(skip_tags, transform);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/doctree.rs"]
mod tests;
