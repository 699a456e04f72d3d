//! sextant: section navigation and live search for markdown documents.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sextant::{
    app_state::{AppState, Focus},
    config::Config,
    formats, input,
    outline::Outline,
    registry::Registry,
    sanitize::{self, SymbolMatcher},
    search::SearchEngine,
    ui,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sextant")]
#[command(about = "Section navigation and live search for markdown documents", long_about = None)]
struct Args {
    /// Markdown document to open
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Section identifier to activate on load
    #[arg(long, value_name = "SECTION_ID")]
    open: Option<String>,

    /// Print the section outline as JSON and exit
    #[arg(long)]
    outline: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let cfg = Config::load();

    let source = input::load_document(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let sections = input::extract_sections(&source, &formats::MarkdownFormat)?;
    let mut registry = Registry::new(sections);

    // Cosmetic pass: a missing matcher must never block the load.
    match SymbolMatcher::probe() {
        Some(matcher) => sanitize::sanitize_registry(&mut registry, &matcher),
        None => warn!("symbol sanitization skipped"),
    }

    if args.outline {
        let json = serde_json::to_string_pretty(&Outline::from_registry(&registry))?;
        println!("{json}");
        return Ok(());
    }

    let mut app = AppState::new(registry, cfg.dark_mode);
    if let Some(ref fragment) = args.open {
        app.seed_from_fragment(fragment);
    }

    run_tui(app, cfg)
}

fn run_tui(mut app: AppState, cfg: Config) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut engine = SearchEngine::new(
        Duration::from_millis(cfg.search_quiet_ms),
        Duration::from_millis(cfg.blur_clear_ms),
    );

    let result = run_app(&mut terminal, &mut app, cfg, &mut engine);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    mut cfg: Config,
    engine: &mut SearchEngine,
) -> anyhow::Result<()> {
    loop {
        if app.take_scroll_request().is_some() {
            // Align the newly active section to the pane's start edge.
            app.content_scroll = 0;
        }

        terminal.draw(|f| ui::draw(f, app))?;

        engine.poll(app, Instant::now());

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, engine, &mut cfg, key.code);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut AppState, engine: &mut SearchEngine, cfg: &mut Config, code: KeyCode) {
    match app.focus {
        Focus::Sidebar => match code {
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Up => app.cursor_up(),
            KeyCode::Down => app.cursor_down(),
            KeyCode::Enter => app.activate_cursor(),
            KeyCode::PageUp => app.content_scroll = app.content_scroll.saturating_sub(10),
            KeyCode::PageDown => app.content_scroll = app.content_scroll.saturating_add(10),
            KeyCode::Char('/') => {
                app.focus = Focus::Search;
                app.message = None;
            }
            KeyCode::Char('t') => toggle_theme(app, cfg),
            _ => {}
        },
        Focus::Search => match code {
            KeyCode::Esc | KeyCode::Enter => {
                app.focus = Focus::Sidebar;
                engine.on_blur(Instant::now());
            }
            KeyCode::Char(c) => {
                app.query_buffer.push(c);
                engine.on_edit(&app.query_buffer, Instant::now());
            }
            KeyCode::Backspace => {
                app.query_buffer.pop();
                engine.on_edit(&app.query_buffer, Instant::now());
            }
            _ => {}
        },
    }
}

fn toggle_theme(app: &mut AppState, cfg: &mut Config) {
    app.dark_mode = !app.dark_mode;
    cfg.dark_mode = app.dark_mode;
    if let Err(err) = cfg.save() {
        warn!(error = %err, "could not persist display preference");
        app.message = Some(format!("Could not save preference: {err}"));
    }
}
