//! Decorative symbol removal from rendered text.
//!
//! Strips pictographic symbols from section titles, navigation labels and
//! body text without touching document structure. The matcher is chosen
//! once at startup: the Unicode `Extended_Pictographic` property when the
//! regex engine can compile it, otherwise a fixed set of legacy symbol
//! ranges with weaker recall. If neither compiles the whole pass is skipped
//! and logged; sanitization is cosmetic and never load-blocking.

use crate::doctree::NON_RENDERED_TAGS;
use crate::registry::Registry;
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, warn};

const PREFERRED_CLASS: &str = r"\p{Extended_Pictographic}";

// Common legacy symbol blocks; misses symbols added after these ranges.
const LEGACY_CLASS: &str =
    r"[\u{2600}-\u{26FF}\u{2700}-\u{27BF}\u{1F300}-\u{1F6FF}\u{1F900}-\u{1F9FF}]";

/// Symbol matcher selected once by capability probe.
pub struct SymbolMatcher {
    pattern: Regex,
    fallback: bool,
}

impl SymbolMatcher {
    #[must_use]
    /// Probes for the preferred Unicode-property matcher, falling back to
    /// the legacy ranges, or `None` when neither compiles.
    pub fn probe() -> Option<Self> {
        match Regex::new(PREFERRED_CLASS) {
            Ok(pattern) => Some(Self {
                pattern,
                fallback: false,
            }),
            Err(err) => {
                debug!(error = %err, "pictographic property class unavailable");
                Self::legacy()
            }
        }
    }

    fn legacy() -> Option<Self> {
        match Regex::new(LEGACY_CLASS) {
            Ok(pattern) => Some(Self {
                pattern,
                fallback: true,
            }),
            Err(err) => {
                warn!(error = %err, "symbol matcher unavailable, skipping sanitization");
                None
            }
        }
    }

    #[must_use]
    /// True when running on the reduced-recall legacy ranges.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    #[must_use]
    /// Removes every matched symbol from `text`, borrowing when unchanged.
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, "")
    }
}

/// Sanitizes all rendered text in the registry, in place.
///
/// Icon-bearing elements come first: navigation labels and section titles
/// are rewritten whole and trimmed, since they frequently hold only a
/// symbol. Body text nodes are then visited with the non-rendered container
/// tags pruned, and a node is rewritten only when matching actually changed
/// it.
pub fn sanitize_registry(registry: &mut Registry, matcher: &SymbolMatcher) {
    for control in &mut registry.controls {
        control.label = matcher.strip(&control.label).trim().to_string();
    }
    for section in &mut registry.sections {
        section.title = matcher.strip(&section.title).trim().to_string();
    }

    for section in &mut registry.sections {
        section
            .body
            .for_each_text_node(NON_RENDERED_TAGS, &mut |text| {
                if let Cow::Owned(stripped) = matcher.strip(text) {
                    *text = stripped;
                }
            });
    }
}

#[cfg(test)]
#[path = "tests/sanitize.rs"]
mod tests;
