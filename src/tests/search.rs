use super::SearchEngine;
use crate::app_state::AppState;
use crate::doctree::Node;
use crate::registry::Registry;
use crate::section::Section;
use std::time::{Duration, Instant};

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

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn highlighted(app: &AppState) -> Vec<usize> {
    app.registry
        .controls
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.highlighted.then_some(i))
        .collect()
}

#[test]
fn test_debounce_collapses_rapid_edits_into_one_recompute() {
    let mut app = app();
    let mut engine = SearchEngine::with_defaults();
    let start = Instant::now();

    // Three keystrokes 50ms apart, each inside the 200ms quiet interval.
    engine.on_edit("z", start);
    engine.on_edit("zi", start + ms(50));
    engine.on_edit("zig", start + ms(100));

    assert!(
        !engine.poll(&mut app, start + ms(250)),
        "earlier edits were cancelled, latest is not yet due"
    );
    assert_eq!(app.activation.active_id(), None);

    assert!(
        engine.poll(&mut app, start + ms(300)),
        "the final edit fires after its own quiet interval"
    );
    assert_eq!(engine.matches(), [0, 2], "computed from the final value");

    assert!(
        !engine.poll(&mut app, start + ms(400)),
        "exactly one recomputation for the burst"
    );
}

#[test]
fn test_match_set_in_document_order_and_all_highlighted() {
    let mut app = app();
    let mut engine = SearchEngine::with_defaults();
    let start = Instant::now();

    engine.on_edit("zig", start);
    engine.poll(&mut app, start + ms(200));

    assert_eq!(engine.matches(), [0, 2]);
    assert_eq!(highlighted(&app), vec![0, 2], "every match is decorated");
    assert_eq!(
        app.activation.active_id(),
        Some("intro"),
        "only the first match drives activation"
    );
}

#[test]
fn test_query_normalization_is_case_insensitive_and_trimmed() {
    let mut app = app();
    let mut engine = SearchEngine::with_defaults();
    let start = Instant::now();

    engine.on_edit("  ZIG  ", start);
    engine.poll(&mut app, start + ms(200));

    assert_eq!(engine.matches(), [0, 2]);
}

#[test]
fn test_empty_query_clears_without_activation() {
    let mut app = app();
    let mut engine = SearchEngine::with_defaults();
    let start = Instant::now();

    engine.on_edit("zig", start);
    engine.poll(&mut app, start + ms(200));
    assert_eq!(app.activation.active_id(), Some("intro"));

    engine.on_edit("   ", start + ms(300));
    assert!(engine.poll(&mut app, start + ms(500)));

    assert!(engine.matches().is_empty());
    assert!(highlighted(&app).is_empty(), "highlights cleared");
    assert_eq!(
        app.activation.active_id(),
        Some("intro"),
        "empty query changes no activation"
    );
}

#[test]
fn test_recompute_replaces_stale_highlights() {
    let mut app = app();
    let mut engine = SearchEngine::with_defaults();
    let start = Instant::now();

    engine.on_edit("zig", start);
    engine.poll(&mut app, start + ms(200));
    assert_eq!(highlighted(&app), vec![0, 2]);

    engine.on_edit("frequently", start + ms(300));
    engine.poll(&mut app, start + ms(500));

    assert_eq!(highlighted(&app), vec![1]);
    assert_eq!(app.activation.active_id(), Some("faq"));
}

#[test]
fn test_no_match_leaves_prior_activation() {
    let mut app = app();
    let mut engine = SearchEngine::with_defaults();
    let start = Instant::now();

    app.activate("faq", "faq");

    engine.on_edit("nonexistent phrase", start);
    engine.poll(&mut app, start + ms(200));

    assert!(engine.matches().is_empty());
    assert_eq!(app.activation.active_id(), Some("faq"));
}

#[test]
fn test_blur_clears_highlights_after_delay() {
    let mut app = app();
    let mut engine = SearchEngine::with_defaults();
    let start = Instant::now();

    engine.on_edit("zig", start);
    engine.poll(&mut app, start + ms(200));
    assert_eq!(highlighted(&app), vec![0, 2]);

    let blur_at = start + ms(250);
    engine.on_blur(blur_at);

    engine.poll(&mut app, blur_at + ms(50));
    assert_eq!(
        highlighted(&app),
        vec![0, 2],
        "a click inside the grace period still sees the decoration"
    );

    engine.poll(&mut app, blur_at + ms(100));
    assert!(highlighted(&app).is_empty());
    assert_eq!(
        app.activation.active_id(),
        Some("intro"),
        "blur clears overlay, not state"
    );
}

#[test]
fn test_search_activation_preserves_invariant() {
    let mut app = app();
    let mut engine = SearchEngine::with_defaults();
    let start = Instant::now();

    app.activate("faq", "faq");
    engine.on_edit("about zig", start);
    engine.poll(&mut app, start + ms(200));

    let active_sections = app.registry.sections.iter().filter(|s| s.active).count();
    let active_controls = app.registry.controls.iter().filter(|c| c.active).count();
    assert_eq!((active_sections, active_controls), (1, 1));
    assert_eq!(app.activation.active_id(), Some("about"));
}

#[test]
fn test_custom_intervals_are_respected() {
    let mut app = app();
    let mut engine = SearchEngine::new(ms(50), ms(10));
    let start = Instant::now();

    engine.on_edit("zig", start);
    assert!(!engine.poll(&mut app, start + ms(40)));
    assert!(engine.poll(&mut app, start + ms(50)));
}
