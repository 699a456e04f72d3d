//! Debounced substring search over section text.
//!
//! Each query edit schedules a recomputation after a quiet interval; a new
//! edit within the interval cancels and reschedules, so rapid typing costs
//! roughly one scan per quiet period rather than one per keystroke. The
//! pending work is an explicit deadline stored on the engine, polled by the
//! event loop tick, which makes the "latest edit wins" semantics visible
//! rather than buried in callbacks. All methods take `now` so timing is
//! deterministic under test.

use crate::app_state::AppState;
use std::time::{Duration, Instant};
use tracing::trace;

/// Quiet interval a query must survive before recomputation runs.
pub const QUIET_INTERVAL: Duration = Duration::from_millis(200);

/// Delay before highlights clear after the search field loses focus.
///
/// Long enough that a click on a highlighted control just before the blur
/// still registers against the decorated state.
pub const BLUR_CLEAR_DELAY: Duration = Duration::from_millis(100);

struct Pending {
    due: Instant,
    query: String,
}

/// Debounced search engine driving navigation highlighting and activation.
pub struct SearchEngine {
    quiet: Duration,
    blur_delay: Duration,
    pending: Option<Pending>,
    blur_clear_due: Option<Instant>,
    matches: Vec<usize>,
}

impl SearchEngine {
    #[must_use]
    /// Creates an engine with explicit intervals (configurable, defaulting
    /// to the reference 200 ms / 100 ms values).
    pub fn new(quiet: Duration, blur_delay: Duration) -> Self {
        Self {
            quiet,
            blur_delay,
            pending: None,
            blur_clear_due: None,
            matches: Vec::new(),
        }
    }

    #[must_use]
    /// Creates an engine with the reference intervals.
    pub fn with_defaults() -> Self {
        Self::new(QUIET_INTERVAL, BLUR_CLEAR_DELAY)
    }

    /// Records a query edit, cancelling any pending recomputation and
    /// scheduling a new one after the quiet interval.
    pub fn on_edit(&mut self, query: &str, now: Instant) {
        self.pending = Some(Pending {
            due: now + self.quiet,
            query: query.to_string(),
        });
    }

    /// Records loss of focus on the search field, scheduling a delayed
    /// highlight clear independent of the debounce.
    pub fn on_blur(&mut self, now: Instant) {
        self.blur_clear_due = Some(now + self.blur_delay);
    }

    /// Fires any deadline that has passed. Returns whether a recomputation
    /// ran.
    pub fn poll(&mut self, app: &mut AppState, now: Instant) -> bool {
        let mut recomputed = false;
        if let Some(pending) = self.pending.take_if(|p| now >= p.due) {
            self.recompute(app, &pending.query);
            recomputed = true;
        }
        if self.blur_clear_due.is_some_and(|due| now >= due) {
            self.blur_clear_due = None;
            app.registry.clear_highlights();
            self.matches.clear();
        }
        recomputed
    }

    #[must_use]
    /// Section indices of the current match set, in document order.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Scans every section for the normalized query and synchronizes
    /// highlighting and activation.
    ///
    /// The full match set is decorated so every match is visible; only the
    /// first match drives activation, preserved as-is from the reference
    /// behavior. No index is kept: the scan is O(sections x query length),
    /// fine at document scale, and always reads the live (sanitized) text.
    fn recompute(&mut self, app: &mut AppState, query: &str) {
        app.registry.clear_highlights();
        self.matches.clear();

        let needle = normalize(query);
        if needle.is_empty() {
            return;
        }

        for (index, section) in app.registry.sections.iter().enumerate() {
            if normalize(&section.text_content()).contains(&needle) {
                self.matches.push(index);
            }
        }
        trace!(query = %needle, matches = self.matches.len(), "search recomputed");

        for &index in &self.matches {
            let id = app.registry.sections[index].id.clone();
            if let Some(control_index) = app.registry.control_index(&id) {
                app.registry.controls[control_index].highlighted = true;
            }
        }

        if let Some(&first) = self.matches.first() {
            let id = app.registry.sections[first].id.clone();
            app.activate(&id, &id);
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
#[path = "tests/search.rs"]
mod tests;
