//! Serialisable document outline for the `--outline` flag.
//!
//! Emitted as pretty JSON so scripts can discover section identifiers (the
//! values `--open` accepts) without entering the TUI.

use crate::registry::Registry;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
/// The full set of sections extracted from a document.
pub struct Outline {
    /// Entries in document order.
    pub sections: Vec<OutlineEntry>,
}

#[derive(Serialize, Deserialize, Clone)]
/// One section's identity and shape.
pub struct OutlineEntry {
    /// Stable identifier accepted by `--open`.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Heading depth (1 for top-level).
    pub level: usize,
    /// Length of the searchable text in characters.
    pub text_chars: usize,
}

impl Outline {
    #[must_use]
    /// Captures the outline of a built registry.
    pub fn from_registry(registry: &Registry) -> Self {
        let sections = registry
            .sections
            .iter()
            .map(|section| OutlineEntry {
                id: section.id.clone(),
                title: section.title.clone(),
                level: section.level,
                text_chars: section.text_content().chars().count(),
            })
            .collect();
        Self { sections }
    }
}
