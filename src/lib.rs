//! sextant: keyboard-driven section navigation and search for markdown documents.
//!
//! A document is parsed once into a registry of sections paired with sidebar
//! navigation controls. Exactly one section may be active at a time; the
//! activation transition lives in [`app_state`] and is the only code allowed
//! to mutate that state. Search ([`search`]) runs debounced substring scans
//! over section text and drives the same transition. Decorative pictographic
//! symbols are stripped from rendered text at load by [`sanitize`].

pub mod app_state;
pub mod config;
pub mod doctree;
pub mod formats;
pub mod input;
pub mod outline;
pub mod registry;
pub mod sanitize;
pub mod search;
pub mod section;
pub mod ui;
