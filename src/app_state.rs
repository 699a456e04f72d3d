//! The core state machine bridging the content registry and the UI.
//!
//! Exactly one section and one navigation control may be marked active at a
//! time, and they always refer to the same identifier. Every component that
//! wants to change which section is shown, whether a sidebar activation, the
//! `--open` seed or a search match, goes through [`AppState::activate`]; the
//! transition function is the only code that touches the active flags, which
//! preserves the invariant mechanically.

use crate::registry::Registry;
use tracing::debug;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
/// Which section pair is currently active, if any.
///
/// The state machine is:
///
/// ```text
/// NoneActive -> Active(id) -> Active(other_id) -> ...
/// ```
///
/// `NoneActive` is the initial state unless a resolvable `--open` id seeds
/// the first transition. There is no transition back to `NoneActive`.
pub struct ActivationState {
    active: Option<String>,
}

impl ActivationState {
    #[must_use]
    /// Identifier of the active section, if one has been activated.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }
}

#[derive(PartialEq, Eq, Clone, Copy)]
/// Which surface receives keystrokes.
pub enum Focus {
    /// Arrow keys move the sidebar cursor; Enter activates.
    Sidebar,
    /// Typed characters edit the search query.
    Search,
}

/// Single source of truth for the running application.
pub struct AppState {
    /// Sections and their paired navigation controls.
    pub registry: Registry,
    /// The one-active-pair state, mutated only by [`AppState::activate`].
    pub activation: ActivationState,
    /// Sidebar cursor position (selection, not activation).
    pub cursor: usize,
    /// Which surface receives keystrokes.
    pub focus: Focus,
    /// Accumulates search input, one keystroke at a time.
    pub query_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Vertical scroll of the content pane.
    pub content_scroll: u16,
    /// Whether the event loop should exit.
    pub should_quit: bool,
    /// Persisted display preference (dark palette when true).
    pub dark_mode: bool,
    scroll_request: Option<usize>,
}

impl AppState {
    #[must_use]
    /// Initialises application state around a built registry.
    pub fn new(registry: Registry, dark_mode: bool) -> Self {
        Self {
            registry,
            activation: ActivationState::default(),
            cursor: 0,
            focus: Focus::Sidebar,
            query_buffer: String::new(),
            message: None,
            content_scroll: 0,
            should_quit: false,
            dark_mode,
            scroll_request: None,
        }
    }

    /// Transitions to `Active(section_id)`, pairing it with the control
    /// targeting `control_target`.
    ///
    /// The pairing is supplied by the caller because search may bring a
    /// section into view through a different control than a direct
    /// activation would use. Both identifiers must be known to the
    /// registry; an unknown identifier is a caller contract violation and
    /// leaves the prior state fully intact (logged, never partial, never a
    /// panic). Returns whether the transition happened.
    pub fn activate(&mut self, section_id: &str, control_target: &str) -> bool {
        let Some(section_index) = self.registry.section_index(section_id) else {
            debug!(section_id, "activation requested for unknown section");
            return false;
        };
        let Some(control_index) = self.registry.control_index(control_target) else {
            debug!(control_target, "activation requested via unknown control");
            return false;
        };

        for (index, section) in self.registry.sections.iter_mut().enumerate() {
            section.active = index == section_index;
        }
        for (index, control) in self.registry.controls.iter_mut().enumerate() {
            control.active = index == control_index;
        }
        self.activation.active = Some(section_id.to_string());
        self.scroll_request = Some(section_index);
        true
    }

    /// Activates the section under the sidebar cursor through its own
    /// control, as a direct click would.
    pub fn activate_cursor(&mut self) {
        let Some(section) = self.registry.sections.get(self.cursor) else {
            return;
        };
        let id = section.id.clone();
        self.activate(&id, &id);
    }

    /// Seeds the initial activation from a fragment-style identifier.
    ///
    /// An unresolvable identifier leaves the state at `NoneActive`; partial
    /// page markup must not break the rest of the page.
    pub fn seed_from_fragment(&mut self, fragment: &str) {
        let id = fragment.trim_start_matches('#');
        if self.activate(id, id) {
            if let Some(index) = self.registry.section_index(id) {
                self.cursor = index;
            }
        } else {
            self.message = Some(format!("No section '{id}'"));
        }
    }

    /// Moves the sidebar cursor up one entry.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Moves the sidebar cursor down one entry.
    pub fn cursor_down(&mut self) {
        if !self.registry.is_empty() && self.cursor < self.registry.len() - 1 {
            self.cursor += 1;
        }
    }

    /// Takes the pending scroll-into-view request, if an activation set one.
    ///
    /// Scrolling is a side effect of activation, not part of its state; the
    /// event loop consumes the request and aligns the content pane to the
    /// section's start edge.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.scroll_request.take()
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
