use super::AppState;
use crate::doctree::Node;
use crate::registry::Registry;
use crate::section::Section;

fn section(id: &str, title: &str, body: &str) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        level: 1,
        body: Node::element(
            "section",
            vec![Node::element("paragraph", vec![Node::text(body)])],
        ),
        active: false,
    }
}

fn app() -> AppState {
    let sections = vec![
        section("intro", "Intro", "Welcome to Zig"),
        section("faq", "FAQ", "Frequently asked questions"),
        section("about", "About", "About Zig project"),
    ];
    AppState::new(Registry::new(sections), false)
}

fn active_counts(app: &AppState) -> (usize, usize) {
    let sections = app.registry.sections.iter().filter(|s| s.active).count();
    let controls = app.registry.controls.iter().filter(|c| c.active).count();
    (sections, controls)
}

#[test]
fn test_initial_state_is_none_active() {
    let app = app();
    assert_eq!(app.activation.active_id(), None);
    assert_eq!(active_counts(&app), (0, 0));
}

#[test]
fn test_activation_invariant_after_sequence() {
    let mut app = app();
    assert!(app.activate("intro", "intro"));
    assert!(app.activate("faq", "faq"));
    assert!(app.activate("about", "about"));
    assert!(app.activate("faq", "faq"));

    assert_eq!(app.activation.active_id(), Some("faq"));
    assert_eq!(active_counts(&app), (1, 1));
    assert!(app.registry.sections[1].active);
    assert!(app.registry.controls[1].active);
}

#[test]
fn test_activate_is_idempotent() {
    let mut app = app();
    app.activate("about", "about");
    let first: Vec<bool> = app.registry.sections.iter().map(|s| s.active).collect();

    app.activate("about", "about");
    let second: Vec<bool> = app.registry.sections.iter().map(|s| s.active).collect();

    assert_eq!(first, second);
    assert_eq!(app.activation.active_id(), Some("about"));
    assert_eq!(active_counts(&app), (1, 1));
}

#[test]
fn test_unknown_id_leaves_state_unchanged() {
    let mut app = app();
    app.activate("faq", "faq");

    assert!(!app.activate("missing", "missing"));
    assert_eq!(app.activation.active_id(), Some("faq"));
    assert_eq!(active_counts(&app), (1, 1));
    assert!(app.registry.sections[1].active);
}

#[test]
fn test_unknown_control_causes_no_partial_update() {
    let mut app = app();
    app.activate("faq", "faq");

    assert!(!app.activate("about", "missing"));
    assert_eq!(
        app.activation.active_id(),
        Some("faq"),
        "a half-applied transition must not leak"
    );
    assert!(app.registry.sections[1].active);
    assert!(!app.registry.sections[2].active);
}

#[test]
fn test_caller_supplied_pairing_is_honored() {
    let mut app = app();
    assert!(app.activate("about", "intro"));

    assert!(app.registry.sections[2].active);
    assert!(app.registry.controls[0].active);
    assert_eq!(active_counts(&app), (1, 1));
}

#[test]
fn test_activation_requests_scroll_into_view() {
    let mut app = app();
    app.activate("about", "about");
    assert_eq!(app.take_scroll_request(), Some(2));
    assert_eq!(app.take_scroll_request(), None, "request is consumed once");
}

#[test]
fn test_fragment_bootstrap_with_known_id() {
    let mut app = app();
    app.seed_from_fragment("faq");

    assert_eq!(app.activation.active_id(), Some("faq"));
    assert_eq!(app.cursor, 1);
}

#[test]
fn test_fragment_bootstrap_accepts_hash_prefix() {
    let mut app = app();
    app.seed_from_fragment("#about");
    assert_eq!(app.activation.active_id(), Some("about"));
}

#[test]
fn test_fragment_bootstrap_with_unknown_id() {
    let mut app = app();
    app.seed_from_fragment("missing");

    assert_eq!(app.activation.active_id(), None);
    assert_eq!(active_counts(&app), (0, 0));
    assert!(app.message.is_some(), "user should see why nothing opened");
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut app = app();
    app.cursor_up();
    assert_eq!(app.cursor, 0);

    app.cursor_down();
    app.cursor_down();
    app.cursor_down();
    app.cursor_down();
    assert_eq!(app.cursor, 2);
}

#[test]
fn test_activate_cursor_uses_own_control() {
    let mut app = app();
    app.cursor_down();
    app.activate_cursor();

    assert_eq!(app.activation.active_id(), Some("faq"));
    assert!(app.registry.controls[1].active);
}
