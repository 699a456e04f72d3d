//! The content registry: sections paired with their navigation controls.
//!
//! Built once at load from the parsed document and read-only thereafter,
//! except for the active and highlight flags. Document order is preserved
//! and significant: search reports matches in this order and activates the
//! first.

use crate::section::{NavControl, Section};

/// Read-only enumeration of sections and their paired controls.
pub struct Registry {
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// One control per section, same order.
    pub controls: Vec<NavControl>,
}

impl Registry {
    #[must_use]
    /// Builds the registry, deriving one navigation control per section.
    pub fn new(sections: Vec<Section>) -> Self {
        let controls = sections
            .iter()
            .map(|section| NavControl {
                target_section_id: section.id.clone(),
                label: section.title.clone(),
                level: section.level,
                active: false,
                highlighted: false,
            })
            .collect();
        Self { sections, controls }
    }

    #[must_use]
    /// Index of the section with the given id, if known.
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    #[must_use]
    /// Index of the control targeting the given section id, if known.
    pub fn control_index(&self, target_id: &str) -> Option<usize> {
        self.controls
            .iter()
            .position(|control| control.target_section_id == target_id)
    }

    #[must_use]
    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// True when the document yielded no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    /// The currently active section, if any.
    pub fn active_section(&self) -> Option<&Section> {
        self.sections.iter().find(|section| section.active)
    }

    /// Removes the search highlight decoration from every control.
    ///
    /// Highlighting is a visual overlay, independent of the active flags.
    pub fn clear_highlights(&mut self) {
        for control in &mut self.controls {
            control.highlighted = false;
        }
    }
}
